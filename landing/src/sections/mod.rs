// Landing page sections
// Developed by The Solae Team (c)2025

mod about;
mod footer;
mod hero;
mod icons;
mod overlay;
mod privacy;
mod rich_text;
mod services;

pub use about::AboutPanel;
pub use footer::Footer;
pub use hero::{Hero, Orb};
pub use icons::{CloseButton, Direction, FaviconIcon, GoldChevron};
pub use overlay::OverlayHost;
pub use privacy::PrivacyPanel;
pub use rich_text::RichTextView;
pub use services::ServicesPanel;
