// Staged fade-in flags driven by timers from mount

use leptos::prelude::*;
use solae_core::{RevealSchedule, RevealStage};

/// Visibility flags, each flipped once after its delay.
#[derive(Clone, Copy)]
pub struct RevealFlags {
    pub page: ReadSignal<bool>,
    pub orb: ReadSignal<bool>,
    pub content: ReadSignal<bool>,
}

/// Start one timer per stage. Timers are cleared when the owner is disposed.
pub fn start(schedule: RevealSchedule) -> RevealFlags {
    let (page, set_page) = signal(false);
    let (orb, set_orb) = signal(false);
    let (content, set_content) = signal(false);

    for (stage, delay) in schedule.stages() {
        let flag = match stage {
            RevealStage::Page => set_page,
            RevealStage::Orb => set_orb,
            RevealStage::Content => set_content,
        };
        match set_timeout_with_handle(move || flag.set(true), delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                tracing::warn!(?err, ?stage, "timer unavailable, revealing immediately");
                flag.set(true);
            }
        }
    }

    RevealFlags { page, orb, content }
}

/// Class list for an element that fades in once `shown` is true.
pub fn revealed(base: &str, shown: bool) -> String {
    if shown {
        format!("{base} reveal shown")
    } else {
        format!("{base} reveal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_toggles_shown() {
        assert_eq!(revealed("hero", false), "hero reveal");
        assert_eq!(revealed("hero", true), "hero reveal shown");
    }
}
