//! Error types for content loading and carousel construction.

use thiserror::Error;

/// Reasons a [`crate::carousel::Carousel`] cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// A carousel needs at least one item to point at.
    #[error("carousel requires at least one item")]
    Empty,
    /// Swipe threshold ratio must be a finite value in `(0, 1]`.
    #[error("swipe threshold ratio {0} is outside (0, 1]")]
    InvalidThreshold(f64),
}

/// Reasons the site content file was rejected.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The TOML itself did not parse or did not match the schema.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field parsed but holds a value the page cannot render.
    #[error("invalid site content at `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field, e.g. `site.contact_email`
        field: &'static str,
        /// Human readable explanation
        reason: String,
    },
    /// Carousel settings were rejected.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

impl ContentError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Field path for [`ContentError::Invalid`], `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}
