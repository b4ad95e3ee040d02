//! Slide pagination.
//!
//! Packs an ordered run of verses into pages. Every configuration value the
//! packing depends on lives in [`LayoutConfig`] and is passed in explicitly,
//! so pagination is deterministic and safe to run in parallel.

pub mod estimate;

use serde::Serialize;

use crate::bible::Verse;
use crate::constants::{fonts, layout, units};
pub use estimate::{CharsPerLine, DisplayWidth, LineEstimator};

/// How verses are distributed over pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LayoutMode {
    /// Every verse gets its own page.
    #[default]
    OnePerPage,
    /// Fill each page up to the height budget.
    GreedyPack,
}

/// How a chapter is named in page titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChapterLabel {
    /// Korean suffix for Hangul book names, bare number otherwise.
    #[default]
    Auto,
    /// `"John 3"`
    Bare,
    /// `"창세기 1장"`, or `"시편 23편"` for the Psalms.
    Korean,
}

impl ChapterLabel {
    /// Build a page title for `chapter` of the book called `display_name`.
    pub fn title(self, display_name: &str, chapter: u32) -> String {
        let korean = match self {
            Self::Auto => display_name.chars().any(is_hangul),
            Self::Bare => false,
            Self::Korean => true,
        };
        if !korean {
            return format!("{display_name} {chapter}");
        }
        let suffix = if display_name == crate::bible::names::PSALMS { "편" } else { "장" };
        format!("{display_name} {chapter}{suffix}")
    }
}

const fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}')
}

/// Pagination parameters. Heights share one abstract unit (centimetres by default).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Height budget for the verse body of one page.
    pub max_body_height: f64,
    /// Height of one wrapped line.
    pub line_height: f64,
    /// Extra height after each verse block.
    pub space_after: f64,
    /// Characters assumed to fit on one wrapped line.
    pub chars_per_line: usize,
    /// Distribution strategy.
    pub mode: LayoutMode,
    /// Title style.
    pub chapter_label: ChapterLabel,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::from_fonts(fonts::DEFAULT_BODY_PT, fonts::DEFAULT_LINE_SPACING)
    }
}

impl LayoutConfig {
    /// Derive line metrics from a body font size (points) and line-spacing factor.
    pub fn from_fonts(body_pt: f64, line_spacing: f64) -> Self {
        Self {
            max_body_height: layout::MAX_BODY_HEIGHT_CM,
            line_height: body_pt * line_spacing * units::CM_PER_PT,
            space_after: fonts::SPACE_AFTER_PT * units::CM_PER_PT,
            chars_per_line: layout::CHARS_PER_LINE,
            mode: LayoutMode::default(),
            chapter_label: ChapterLabel::default(),
        }
    }

    /// Set the distribution strategy.
    #[must_use]
    pub const fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the title style.
    #[must_use]
    pub const fn with_chapter_label(mut self, label: ChapterLabel) -> Self {
        self.chapter_label = label;
        self
    }

    /// Estimated height of one rendered verse line, including the space after it.
    pub fn block_height(&self, estimator: &dyn LineEstimator, rendered: &str) -> f64 {
        f64::from(estimator.estimate_lines(rendered)) * self.line_height + self.space_after
    }
}

/// One verse line on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLine {
    /// Verse number.
    pub number: u32,
    /// Verse text.
    pub text: String,
}

impl PageLine {
    /// The line as shown on the slide, e.g. `"16. For God so loved..."`.
    pub fn rendered(&self) -> String {
        format!("{}. {}", self.number, self.text)
    }
}

/// One page of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Chapter title, empty on continuation pages.
    pub title: String,
    /// Chapter all lines belong to.
    pub chapter: u32,
    /// Verse lines in order.
    pub lines: Vec<PageLine>,
}

impl Page {
    /// True when the page continues the previous page's chapter and has no title.
    pub fn is_continuation(&self) -> bool {
        self.title.is_empty()
    }

    /// Estimated body height, summed in line order.
    pub fn body_height(&self, config: &LayoutConfig, estimator: &dyn LineEstimator) -> f64 {
        self.lines
            .iter()
            .fold(0.0, |used, line| used + config.block_height(estimator, &line.rendered()))
    }
}

/// Paginate verses using the character-count heuristic from `config`.
///
/// `display_name` is the book name used in titles.
pub fn paginate(display_name: &str, verses: &[Verse], config: &LayoutConfig) -> Vec<Page> {
    paginate_with(display_name, verses, config, &CharsPerLine(config.chars_per_line))
}

/// Paginate verses with a custom line estimator.
///
/// A page never spans two chapters. The first page of each chapter gets a
/// title; later pages of the same chapter are continuations with an empty
/// title. In [`LayoutMode::GreedyPack`] a verse that would push the page past
/// `max_body_height` starts a new page, except that a page always takes at
/// least one verse.
pub fn paginate_with(
    display_name: &str,
    verses: &[Verse],
    config: &LayoutConfig,
    estimator: &dyn LineEstimator,
) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current_chapter: Option<u32> = None;
    let mut rest = verses;

    while let Some(first) = rest.first() {
        let title = if current_chapter == Some(first.chapter) {
            String::new()
        } else {
            current_chapter = Some(first.chapter);
            config.chapter_label.title(display_name, first.chapter)
        };

        let taken = match config.mode {
            LayoutMode::OnePerPage => 1,
            LayoutMode::GreedyPack => fill_count(rest, config, estimator),
        };
        let (page_verses, remaining) = rest.split_at(taken);
        rest = remaining;

        pages.push(Page {
            title,
            chapter: first.chapter,
            lines: page_verses
                .iter()
                .map(|v| PageLine { number: v.verse, text: v.text.clone() })
                .collect(),
        });
    }

    pages
}

/// How many leading verses of `verses` fit on one page (at least one).
fn fill_count(verses: &[Verse], config: &LayoutConfig, estimator: &dyn LineEstimator) -> usize {
    let Some(chapter) = verses.first().map(|v| v.chapter) else {
        return 0;
    };

    let mut used = 0.0;
    let mut count = 0;
    for verse in verses {
        if verse.chapter != chapter {
            break;
        }
        let line = PageLine { number: verse.verse, text: verse.text.clone() };
        let height = config.block_height(estimator, &line.rendered());
        if count > 0 && used + height > config.max_body_height {
            break;
        }
        used += height;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    fn verse(chapter: u32, verse: u32, text: &str) -> Verse {
        Verse { chapter, verse, text: text.to_string() }
    }

    fn unit_config(max_body_height: f64, mode: LayoutMode) -> LayoutConfig {
        LayoutConfig {
            max_body_height,
            line_height: 1.0,
            space_after: 0.0,
            chars_per_line: 10,
            mode,
            chapter_label: ChapterLabel::Bare,
        }
    }

    #[test]
    fn test_single_verse_one_per_page() {
        let pages = paginate("John", &[verse(3, 16, "T")], &unit_config(14.0, LayoutMode::OnePerPage));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "John 3");
        assert_eq!(pages[0].lines[0].rendered(), "16. T");
    }

    #[test]
    fn test_one_per_page_titles_only_on_new_chapter() {
        let verses = [verse(1, 1, "a"), verse(1, 2, "b"), verse(2, 1, "c")];
        let pages = paginate("Gen", &verses, &unit_config(14.0, LayoutMode::OnePerPage));
        let titles: Vec<_> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Gen 1", "", "Gen 2"]);
        assert!(pages[1].is_continuation());
    }

    #[test]
    fn test_greedy_pack_respects_budget() {
        // "n. xxxxxxx" is 10 chars -> 1 line each; budget of 3 lines per page.
        let verses: Vec<_> = (1..=7).map(|n| verse(1, n, "xxxxxxx")).collect();
        let config = unit_config(3.0, LayoutMode::GreedyPack);
        let pages = paginate("Gen", &verses, &config);
        let sizes: Vec<_> = pages.iter().map(|p| p.lines.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(pages[0].title, "Gen 1");
        assert!(pages[1].is_continuation() && pages[2].is_continuation());
        let est = CharsPerLine(10);
        assert!(pages.iter().all(|p| p.body_height(&config, &est) <= 3.0));
    }

    #[test]
    fn test_greedy_pack_breaks_at_chapter() {
        let verses = [verse(1, 1, "a"), verse(1, 2, "b"), verse(2, 1, "c")];
        let pages = paginate("Gen", &verses, &unit_config(100.0, LayoutMode::GreedyPack));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 2);
        assert_eq!(pages[1].title, "Gen 2");
        assert_eq!(pages[1].chapter, 2);
    }

    #[test]
    fn test_oversized_verse_gets_own_page() {
        let long = "x".repeat(100);
        let verses = [verse(1, 1, "a"), verse(1, 2, &long), verse(1, 3, "b")];
        let pages = paginate("Gen", &verses, &unit_config(3.0, LayoutMode::GreedyPack));
        let sizes: Vec<_> = pages.iter().map(|p| p.lines.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1]);
        assert_eq!(pages[1].lines[0].number, 2);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        assert!(paginate("Gen", &[], &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn test_custom_estimator() {
        let verses: Vec<_> = (1..=4).map(|n| verse(1, n, "a")).collect();
        let three_lines = |_: &str| -> u32 { 3 };
        let pages = paginate_with("Gen", &verses, &unit_config(6.0, LayoutMode::GreedyPack), &three_lines);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_chapter_labels() {
        assert_eq!(ChapterLabel::Auto.title("창세기", 1), "창세기 1장");
        assert_eq!(ChapterLabel::Auto.title("시편", 23), "시편 23편");
        assert_eq!(ChapterLabel::Auto.title("John", 3), "John 3");
        assert_eq!(ChapterLabel::Bare.title("시편", 23), "시편 23");
        assert_eq!(ChapterLabel::Korean.title("John", 3), "John 3장");
    }

    #[test]
    fn test_from_fonts_line_height() {
        let config = LayoutConfig::from_fonts(38.0, 1.4);
        assert!((config.line_height - 38.0 * 1.4 * 0.035_277_8).abs() < 1e-9);
        assert_eq!(config.max_body_height, 14.0);
        assert_eq!(config.chars_per_line, 20);
    }
}
