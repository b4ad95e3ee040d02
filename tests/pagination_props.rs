//! Property tests for the pager.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use proptest::prelude::*;
use versedeck::bible::Verse;
use versedeck::layout::{paginate, CharsPerLine, ChapterLabel, LayoutConfig, LayoutMode, Page};

/// Ordered verses spread over a few chapters.
fn verses() -> impl Strategy<Value = Vec<Verse>> {
    prop::collection::vec((1u32..4, "[a-z가-힣 ]{0,80}"), 0..60).prop_map(|entries| {
        let mut chapter = 1;
        let mut verse = 0;
        entries
            .into_iter()
            .map(|(step, text)| {
                // Roughly one in three verses opens a new chapter.
                if step == 1 && verse > 0 {
                    chapter += 1;
                    verse = 0;
                }
                verse += 1;
                Verse { chapter, verse, text }
            })
            .collect()
    })
}

fn config() -> impl Strategy<Value = LayoutConfig> {
    (1.0f64..20.0, 0.2f64..3.0, 0.0f64..1.0, 5usize..40, any::<bool>()).prop_map(
        |(max_body_height, line_height, space_after, chars_per_line, pack)| LayoutConfig {
            max_body_height,
            line_height,
            space_after,
            chars_per_line,
            mode: if pack { LayoutMode::GreedyPack } else { LayoutMode::OnePerPage },
            chapter_label: ChapterLabel::Bare,
        },
    )
}

fn flatten(pages: &[Page]) -> Vec<(u32, u32, String)> {
    pages
        .iter()
        .flat_map(|p| p.lines.iter().map(move |l| (p.chapter, l.number, l.text.clone())))
        .collect()
}

proptest! {
    #[test]
    fn pagination_keeps_every_verse_once(verses in verses(), config in config()) {
        let pages = paginate("Book", &verses, &config);
        let expected: Vec<(u32, u32, String)> =
            verses.iter().map(|v| (v.chapter, v.verse, v.text.clone())).collect();
        prop_assert_eq!(flatten(&pages), expected);
    }

    #[test]
    fn greedy_pages_respect_height_budget(verses in verses(), config in config()) {
        let config = config.with_mode(LayoutMode::GreedyPack);
        let estimator = CharsPerLine(config.chars_per_line);
        for page in paginate("Book", &verses, &config) {
            let height = page.body_height(&config, &estimator);
            prop_assert!(
                height <= config.max_body_height || page.lines.len() == 1,
                "page of {} lines is {} high (budget {})",
                page.lines.len(),
                height,
                config.max_body_height
            );
        }
    }

    #[test]
    fn pages_never_span_chapters(verses in verses(), config in config()) {
        let pages = paginate("Book", &verses, &config);
        let mut source = verses.iter();
        for page in &pages {
            prop_assert!(!page.lines.is_empty());
            for _ in &page.lines {
                let verse = source.next().unwrap();
                prop_assert_eq!(verse.chapter, page.chapter);
            }
        }
    }

    #[test]
    fn one_per_page_has_a_page_per_verse(verses in verses(), config in config()) {
        let config = config.with_mode(LayoutMode::OnePerPage);
        prop_assert_eq!(paginate("Book", &verses, &config).len(), verses.len());
    }

    #[test]
    fn only_chapter_openers_have_titles(verses in verses(), config in config()) {
        let pages = paginate("Book", &verses, &config);
        let mut previous = None;
        for page in &pages {
            prop_assert_eq!(page.is_continuation(), previous == Some(page.chapter));
            previous = Some(page.chapter);
        }
    }
}
