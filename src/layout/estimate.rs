//! Line-count estimation for wrapped verse text.
//!
//! No text shaping happens here: estimators only guess how many wrapped lines
//! a string occupies, which is enough to decide where slides break.

use unicode_width::UnicodeWidthStr;

/// Estimates how many wrapped lines a piece of text needs.
pub trait LineEstimator {
    /// Number of wrapped lines for `text`.
    fn estimate_lines(&self, text: &str) -> u32;
}

/// Counts characters and assumes a fixed number fit on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsPerLine(pub usize);

impl LineEstimator for CharsPerLine {
    fn estimate_lines(&self, text: &str) -> u32 {
        let chars = text.chars().count();
        saturate(chars.div_ceil(self.0.max(1)))
    }
}

/// Counts terminal display columns, so wide CJK glyphs weigh double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWidth(pub usize);

impl LineEstimator for DisplayWidth {
    fn estimate_lines(&self, text: &str) -> u32 {
        saturate(text.width().div_ceil(self.0.max(1)))
    }
}

impl<F> LineEstimator for F
where
    F: Fn(&str) -> u32,
{
    fn estimate_lines(&self, text: &str) -> u32 {
        self(text)
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
