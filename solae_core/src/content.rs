//! Site content and settings.
//!
//! Everything the page displays lives in `content/site.toml`, compiled into
//! the binary. [`SiteContent::embedded`] parses and validates it once at
//! startup; the view layer only ever sees a validated value.

use std::str::FromStr;

use serde::Deserialize;

use crate::carousel::{Carousel, DEFAULT_SWIPE_THRESHOLD, validate_threshold};
use crate::error::ContentError;
use crate::reveal::RevealSchedule;
use crate::rich_text::{RichText, is_safe_href};

/// Raw content file shipped with the page.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/site.toml");

/// Root of `site.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub reveal: RevealSchedule,
    pub carousel: CarouselConfig,
    pub logging: LoggingConfig,
    /// Tool names for the "trusted tools" ticker
    pub tools: Vec<String>,
    pub about: About,
    pub services: Vec<Service>,
    pub privacy: Vec<PrivacySection>,
}

/// Brand and contact details.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Word-mark shown in the hero
    pub brand: String,
    pub tagline: String,
    pub cta_label: String,
    pub contact_email: String,
    /// Name used in the copyright line
    pub copyright_holder: String,
    /// Caption above the tools ticker
    pub tools_caption: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Fraction of the viewport width a drag must exceed to swipe
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<tracing::Level, ContentError> {
        tracing::Level::from_str(self.level.trim())
            .map_err(|e| ContentError::invalid("logging.level", e.to_string()))
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct About {
    pub lead: RichText,
    pub paragraphs: Vec<RichText>,
    /// Smaller closing note, typically the hiring call
    pub footnote: RichText,
    pub photo: Photo,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

/// One consulting offer, shown as a card and as a carousel slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub text: RichText,
    #[serde(default)]
    pub highlight: Option<Highlight>,
}

/// Extra block rendered under a service description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Highlight {
    /// Headline numbers, e.g. `3x` / `Lead Generation`
    Stats { items: Vec<Stat> },
    /// A client quote with attribution
    Testimonial {
        quote: String,
        author: String,
        #[serde(default)]
        href: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrivacySection {
    pub heading: String,
    pub body: RichText,
}

/// Ticker cell: the tool name plus a key unique across the doubled strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerItem {
    pub key: String,
    pub name: String,
}

impl SiteContent {
    /// Parse and validate the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        tracing::debug!(
            services = content.services.len(),
            tools = content.tools.len(),
            "site content loaded"
        );
        Ok(content)
    }

    /// Reject content the page cannot render sensibly.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.site.brand.trim().is_empty() {
            return Err(ContentError::invalid("site.brand", "must not be empty"));
        }
        let email = self.site.contact_email.trim();
        if email.is_empty() || !email.contains('@') || email.contains(char::is_whitespace) {
            return Err(ContentError::invalid(
                "site.contact_email",
                format!("`{email}` is not an email address"),
            ));
        }
        if self.tools.iter().all(|t| t.trim().is_empty()) {
            return Err(ContentError::invalid("tools", "at least one tool is required"));
        }
        if self.services.is_empty() {
            return Err(ContentError::invalid("services", "at least one service is required"));
        }
        for service in &self.services {
            if service.title.trim().is_empty() {
                return Err(ContentError::invalid("services.title", "must not be empty"));
            }
            if let Some(Highlight::Testimonial { href: Some(href), .. }) = &service.highlight {
                if !is_safe_href(href) {
                    return Err(ContentError::invalid(
                        "services.highlight.href",
                        format!("unsupported link `{href}`"),
                    ));
                }
            }
        }
        validate_threshold(self.carousel.swipe_threshold)?;
        self.logging.max_level()?;
        Ok(())
    }

    /// Fresh carousel over the services, positioned at the first one.
    pub fn service_carousel(&self) -> Result<Carousel<Service>, ContentError> {
        let carousel =
            Carousel::new(self.services.clone())?.with_threshold_ratio(self.carousel.swipe_threshold)?;
        Ok(carousel)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.site.contact_email.trim())
    }

    /// Copyright line for the footer.
    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.site.copyright_holder)
    }

    /// The tool list twice in a row, so the scrolling strip loops seamlessly.
    pub fn ticker(&self) -> Vec<TickerItem> {
        let tools: Vec<&str> = self
            .tools
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        tools
            .iter()
            .chain(tools.iter())
            .enumerate()
            .map(|(position, name)| TickerItem {
                key: format!("{name}-{position}"),
                name: (*name).to_owned(),
            })
            .collect()
    }
}
