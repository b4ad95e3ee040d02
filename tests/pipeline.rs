//! End-to-end tests: batch input → parse → resolve → paginate → render.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use versedeck::bible::{parse_reference, resolve, Corpus, RangeEnd};
use versedeck::error::Error;
use versedeck::layout::{paginate, ChapterLabel, LayoutConfig, LayoutMode};
use versedeck::pptx::PptxRenderer;
use versedeck::services::scripture::ScriptureService;
use versedeck::services::slides::{SlideAspect, SlideRenderer};

fn fixture() -> Corpus {
    let psalm: Vec<String> = (1..=6)
        .map(|v| format!(r#"{{"verse": {v}, "text": "Psalm verse {v}"}}"#))
        .collect();
    let genesis: Vec<String> = (1..=30)
        .map(|v| format!(r#"{{"verse": "{v}", "text": "short {v}"}}"#))
        .collect();
    let json = format!(
        r#"{{"books": [
            {{"name": "Genesis", "display_name": "Genesis", "chapters": [
                {{"chapter": 1, "verses": [{}]}},
                {{"chapter": 2, "verses": [{{"verse": 1, "text": "finished"}}]}}
            ]}},
            {{"name": "Psalm", "display_name": "Psalm", "chapters": [
                {{"chapter": 23, "verses": [{}]}}
            ]}},
            {{"name": "John", "display_name": "John", "chapters": [
                {{"chapter": 3, "verses": [{{"verse": 16, "text": "T"}}]}}
            ]}},
            {{"name": "창", "chapters": [
                {{"chapter": 1, "verses": [{{"verse": 1, "text": "태초에 하나님이 천지를 창조하시니라"}}]}}
            ]}}
        ]}}"#,
        genesis.join(","),
        psalm.join(",")
    );
    Corpus::from_json(&json).unwrap()
}

fn one_per_page() -> LayoutConfig {
    LayoutConfig::default().with_chapter_label(ChapterLabel::Bare)
}

#[test]
fn single_verse_reference() {
    let corpus = fixture();
    let range = parse_reference("John3:16", &corpus).unwrap();
    assert_eq!(range.book.name, "John");
    assert_eq!((range.start_chapter, range.start_verse), (3, 16));
    assert_eq!(range.end, RangeEnd::Verse(16));

    let verses = resolve(&range).unwrap();
    assert_eq!(verses.len(), 1);
    assert_eq!((verses[0].chapter, verses[0].verse, verses[0].text.as_str()), (3, 16, "T"));

    let pages = paginate(&range.book.display_name, &verses, &one_per_page());
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title, "John 3");
    assert_eq!(pages[0].lines[0].rendered(), "16. T");
}

#[test]
fn whole_chapter_reference() {
    let corpus = fixture();
    let verses = resolve(&parse_reference("Psalm23", &corpus).unwrap()).unwrap();
    let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn verse_range_within_chapter() {
    let corpus = fixture();
    let verses = resolve(&parse_reference("Genesis1:1-3", &corpus).unwrap()).unwrap();
    let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn reversed_range_resolves_to_nothing() {
    let corpus = fixture();
    let verses = resolve(&parse_reference("Genesis1:3-1", &corpus).unwrap()).unwrap();
    assert!(verses.is_empty());
}

#[test]
fn unknown_book_aborts_batch() {
    let corpus = fixture();
    let service = ScriptureService::new(&corpus);
    let err = service.generate("John3:16, Exodus1:1", &one_per_page()).unwrap_err();
    assert!(matches!(err, Error::BookNotFound { ref book, .. } if book == "Exodus"));
    assert_eq!(err.token(), Some("Exodus1:1"));
}

#[test]
fn greedy_pack_splits_long_chapter() {
    let corpus = fixture();
    let config = LayoutConfig {
        max_body_height: 5.0,
        line_height: 1.0,
        space_after: 0.0,
        chars_per_line: 20,
        mode: LayoutMode::GreedyPack,
        chapter_label: ChapterLabel::Bare,
    };
    let deck = ScriptureService::new(&corpus).generate("Genesis1", &config).unwrap();
    let pages: Vec<_> = deck.pages().collect();

    assert_eq!(pages.len(), 6);
    assert_eq!(pages[0].title, "Genesis 1");
    assert!(pages[1..].iter().all(|p| p.is_continuation()));
    assert!(pages.iter().all(|p| p.lines.len() == 5));
}

#[test]
fn batch_keeps_token_order_and_korean_titles() {
    let corpus = fixture();
    let deck = ScriptureService::new(&corpus)
        .generate("창1 John3:16", &LayoutConfig::default())
        .unwrap();
    let tokens: Vec<&str> = deck.sections.iter().map(|s| s.token.as_str()).collect();
    assert_eq!(tokens, vec!["창1", "John3:16"]);

    let titles: Vec<&str> = deck.pages().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["창세기 1장", "John 3"]);
}

#[test]
fn cross_chapter_range() {
    let corpus = fixture();
    let verses = resolve(&parse_reference("Genesis1:29-2:1", &corpus).unwrap()).unwrap();
    let refs: Vec<(u32, u32)> = verses.iter().map(|v| (v.chapter, v.verse)).collect();
    assert_eq!(refs, vec![(1, 29), (1, 30), (2, 1)]);
}

#[test]
fn empty_batch_is_rejected() {
    let corpus = fixture();
    let err = ScriptureService::new(&corpus).generate(" ,, ", &one_per_page()).unwrap_err();
    assert!(matches!(err, Error::EmptyBatch));
}

#[test]
fn deck_renders_to_pptx() {
    let corpus = fixture();
    let deck = ScriptureService::new(&corpus)
        .generate("Psalm23:1-3", &one_per_page())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("versedeck_combined_0.pptx");

    let renderer = PptxRenderer::new(SlideAspect::Standard);
    renderer.render(&deck, &path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let slides = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 3);
    assert_eq!(renderer.extension(), "pptx");
}
