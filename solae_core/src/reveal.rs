//! Staged fade-in after the page mounts.

use serde::Deserialize;
use std::time::Duration;

/// One-shot visibility flags flipped on a timer after mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealStage {
    /// Header, logo and footer slide into place
    Page,
    /// The blurred orb behind the logo
    Orb,
    /// Tagline, call to action and the tools ticker
    Content,
}

/// Delays, in milliseconds from mount, for each [`RevealStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealSchedule {
    pub page_ms: u64,
    pub orb_ms: u64,
    pub content_ms: u64,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            page_ms: 100,
            orb_ms: 700,
            content_ms: 900,
        }
    }
}

impl RevealSchedule {
    pub fn delay(&self, stage: RevealStage) -> Duration {
        let ms = match stage {
            RevealStage::Page => self.page_ms,
            RevealStage::Orb => self.orb_ms,
            RevealStage::Content => self.content_ms,
        };
        Duration::from_millis(ms)
    }

    /// Every stage with its delay, earliest first.
    pub fn stages(&self) -> Vec<(RevealStage, Duration)> {
        let mut stages: Vec<_> = [RevealStage::Page, RevealStage::Orb, RevealStage::Content]
            .into_iter()
            .map(|stage| (stage, self.delay(stage)))
            .collect();
        stages.sort_by_key(|(_, delay)| *delay);
        stages
    }
}
