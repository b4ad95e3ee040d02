//! Slide rendering service.
//!
//! The rendering collaborator turns a [`Deck`] into a visual document. The
//! core never writes files itself; it only calls through this trait.

use std::path::Path;

use serde::Serialize;

use super::scripture::Deck;
use crate::constants::slide;
use crate::error::Result;

/// Slide aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SlideAspect {
    /// 4:3
    Standard,
    /// 16:9
    #[default]
    Wide,
}

impl SlideAspect {
    /// Slide width in inches.
    pub const fn width_in(self) -> f64 {
        match self {
            Self::Standard => slide::STANDARD_WIDTH_IN,
            Self::Wide => slide::WIDE_WIDTH_IN,
        }
    }

    /// Slide height in inches.
    pub const fn height_in(self) -> f64 {
        slide::HEIGHT_IN
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "4:3",
            Self::Wide => "16:9",
        }
    }
}

/// Trait for deck renderers.
///
/// Different implementations can produce decks in various formats.
pub trait SlideRenderer {
    /// Render `deck` to a file at `output`.
    ///
    /// Failing to create or write the file is reported as
    /// [`crate::error::Error::ArtifactWrite`]; renderers do not retry.
    fn render(&self, deck: &Deck, output: &Path) -> Result<()>;

    /// Get the file extension for this format.
    fn extension(&self) -> &'static str;

    /// Get the format name (for display purposes).
    fn format_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_aspect_dimensions() {
        assert_eq!(SlideAspect::Standard.width_in(), 10.0);
        assert_eq!(SlideAspect::Wide.width_in(), 13.33);
        assert_eq!(SlideAspect::Wide.height_in(), 7.5);
        assert_eq!(SlideAspect::default(), SlideAspect::Wide);
    }
}
