//! # solae-core
//!
//! Content model and interaction state for the solae landing page.
//!
//! The view crate (`solae-landing`) renders; this crate decides. It holds
//! no browser types, so everything here runs under the regular test harness.
//!
//! ## Modules
//!
//! - [`carousel`] - cursor over the services, moved by buttons and swipes
//! - [`content`] - `site.toml` schema, validation and derived values
//! - [`overlay`] - the About / Services / Privacy panels
//! - [`reveal`] - fade-in schedule after mount
//! - [`rich_text`] - inline `**strong**` / `[link](href)` spans
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```rust
//! use solae_core::content::SiteContent;
//!
//! let content = SiteContent::embedded().expect("bundled content is valid");
//! let mut services = content.service_carousel().expect("at least one service");
//!
//! services.begin_gesture(800.0);
//! services.update_gesture(600.0);
//! services.end_gesture(1000.0);
//! assert_eq!(services.current_index(), 1);
//! ```
//!
//! ---
//!
//! Developed by The Solae Team (c)2025

pub mod carousel;
pub mod content;
pub mod error;
pub mod overlay;
pub mod reveal;
pub mod rich_text;

pub use carousel::{Carousel, Swipe};
pub use content::{Highlight, Service, SiteContent};
pub use error::{CarouselError, ContentError};
pub use overlay::Overlay;
pub use reveal::{RevealSchedule, RevealStage};
pub use rich_text::{RichText, Span};
