//! In-memory corpus index: book → ordered chapters → ordered verses.
//!
//! Built once from the JSON dataset and read-only afterwards, so a single
//! `Corpus` can be shared across threads without locking.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Deserialize;

use super::names;
use crate::error::{Error, Result};

/// A single verse of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Chapter this verse belongs to.
    pub chapter: u32,
    /// Verse number within the chapter.
    pub verse: u32,
    /// Verse text.
    pub text: String,
}

/// A chapter with its verses sorted by verse number.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Chapter number (strictly positive).
    pub number: u32,
    /// Verses in ascending order, unique by number.
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Number of the last verse, or `None` for an empty chapter.
    pub fn last_verse(&self) -> Option<u32> {
        self.verses.last().map(|v| v.verse)
    }

    /// Verses with `start <= number <= end`. Empty when `start > end`.
    pub fn verses_between(&self, start: u32, end: u32) -> impl Iterator<Item = &Verse> {
        self.verses
            .iter()
            .filter(move |v| start <= v.verse && v.verse <= end)
    }
}

/// A book of the corpus.
#[derive(Debug, Clone)]
pub struct Book {
    /// Canonical short name used in references (e.g. `창`).
    pub name: String,
    /// Full name used in slide titles (e.g. `창세기`).
    pub display_name: String,
    /// Chapters in ascending order, unique by number.
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Find a chapter by number.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters
            .binary_search_by_key(&number, |c| c.number)
            .ok()
            .and_then(|idx| self.chapters.get(idx))
    }

    /// The highest-numbered chapter.
    pub fn last_chapter(&self) -> Option<&Chapter> {
        self.chapters.last()
    }
}

/// Read-only index over all books of a dataset.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    books: Vec<Book>,
    by_name: HashMap<String, usize>,
}

// Dataset wire format. Numbers appear both as JSON numbers and as strings.

#[derive(Debug, Deserialize)]
struct RawCorpus {
    books: Vec<RawBook>,
}

#[derive(Debug, Deserialize)]
struct RawBook {
    name: String,
    #[serde(default, alias = "full_name")]
    display_name: Option<String>,
    chapters: Vec<RawChapter>,
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    chapter: RawNumber,
    #[serde(default)]
    verses: Vec<RawVerse>,
}

#[derive(Debug, Deserialize)]
struct RawVerse {
    verse: RawNumber,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(u64),
    Text(String),
}

impl RawNumber {
    fn positive(&self) -> Option<u32> {
        let n = match self {
            Self::Int(n) => u32::try_from(*n).ok()?,
            Self::Text(s) => s.trim().parse::<u32>().ok()?,
        };
        (n > 0).then_some(n)
    }

    fn describe(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => format!("{s:?}"),
        }
    }
}

impl Corpus {
    /// Load and validate a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)
            .map_err(|e| Error::corpus(e.to_string(), path.to_path_buf()))?;
        let corpus = Self::parse(&content, Some(path.to_path_buf()))?;
        tracing::info!("Loaded {} books from {}", corpus.books.len(), path.display());
        Ok(corpus)
    }

    /// Load and validate a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, None)
    }

    fn parse(json: &str, path: Option<PathBuf>) -> Result<Self> {
        let raw: RawCorpus =
            serde_json::from_str(json).map_err(|e| Error::corpus(e.to_string(), path.clone()))?;

        let mut corpus = Self::default();
        for raw_book in raw.books {
            let book = build_book(raw_book).map_err(|msg| Error::corpus(msg, path.clone()))?;
            if corpus.by_name.contains_key(&book.name) {
                return Err(Error::corpus(format!("duplicate book '{}'", book.name), path));
            }
            corpus.by_name.insert(book.name.clone(), corpus.books.len());
            corpus.books.push(book);
        }
        Ok(corpus)
    }

    /// Exact lookup by canonical short name.
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.by_name.get(name).and_then(|&idx| self.books.get(idx))
    }

    /// Books in dataset order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Closest known short name for an unknown book, for error messages only.
    ///
    /// Matches against both short and display names, so typing the full name
    /// (`창세기`) suggests the short form (`창`).
    pub fn suggest(&self, query: &str) -> Option<&str> {
        if query.is_empty() {
            return None;
        }
        let matcher = SkimMatcherV2::default();
        self.books
            .iter()
            .filter_map(|book| {
                let score = [
                    matcher.fuzzy_match(&book.display_name, query),
                    matcher.fuzzy_match(&book.name, query),
                    matcher.fuzzy_match(query, &book.name),
                ]
                .into_iter()
                .flatten()
                .max()?;
                Some((score, book.name.as_str()))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, name)| name)
    }
}

fn build_book(raw: RawBook) -> std::result::Result<Book, String> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err("book with empty name".to_string());
    }
    if raw.chapters.is_empty() {
        return Err(format!("book '{name}' has no chapters"));
    }

    let mut chapters = Vec::with_capacity(raw.chapters.len());
    for raw_chapter in raw.chapters {
        let number = raw_chapter.chapter.positive().ok_or_else(|| {
            format!("book '{name}': invalid chapter number {}", raw_chapter.chapter.describe())
        })?;

        let mut verses = Vec::with_capacity(raw_chapter.verses.len());
        for raw_verse in raw_chapter.verses {
            let verse = raw_verse.verse.positive().ok_or_else(|| {
                format!(
                    "{name} {number}: invalid verse number {}",
                    raw_verse.verse.describe()
                )
            })?;
            verses.push(Verse { chapter: number, verse, text: raw_verse.text });
        }
        verses.sort_by_key(|v| v.verse);
        if let Some(pair) = verses.windows(2).find(|w| w[0].verse == w[1].verse) {
            return Err(format!("{name} {number}: duplicate verse {}", pair[0].verse));
        }

        chapters.push(Chapter { number, verses });
    }
    chapters.sort_by_key(|c| c.number);
    if let Some(pair) = chapters.windows(2).find(|w| w[0].number == w[1].number) {
        return Err(format!("book '{name}': duplicate chapter {}", pair[0].number));
    }

    let display_name = raw
        .display_name
        .filter(|d| !d.trim().is_empty())
        .or_else(|| names::full_name(&name).map(str::to_string))
        .unwrap_or_else(|| name.clone());

    Ok(Book { name, display_name, chapters })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SAMPLE: &str = r#"{
        "books": [
            {"name": "창", "chapters": [
                {"chapter": "2", "verses": [{"verse": "1", "text": "b"}]},
                {"chapter": 1, "verses": [
                    {"verse": 2, "text": "a2"},
                    {"verse": 1, "text": "a1"}
                ]}
            ]},
            {"name": "John", "display_name": "John", "chapters": [
                {"chapter": 3, "verses": [{"verse": 16, "text": "T"}]}
            ]}
        ]
    }"#;

    #[test]
    fn test_load_sorts_chapters_and_verses() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        let book = corpus.find_book("창").unwrap();
        assert_eq!(book.display_name, "창세기");
        assert_eq!(book.chapters[0].number, 1);
        assert_eq!(book.chapters[0].verses[0].text, "a1");
        assert_eq!(book.last_chapter().unwrap().number, 2);
    }

    #[test]
    fn test_find_book_is_exact() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        assert!(corpus.find_book("John").is_some());
        assert!(corpus.find_book("john").is_none());
        assert!(corpus.find_book("창세기").is_none());
    }

    #[test]
    fn test_chapter_lookup() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        let john = corpus.find_book("John").unwrap();
        assert_eq!(john.chapter(3).unwrap().last_verse(), Some(16));
        assert!(john.chapter(1).is_none());
    }

    #[test]
    fn test_verses_between_reversed_is_empty() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        let ch = corpus.find_book("창").unwrap().chapter(1).unwrap();
        assert_eq!(ch.verses_between(1, 2).count(), 2);
        assert_eq!(ch.verses_between(2, 1).count(), 0);
    }

    #[test]
    fn test_missing_field_is_load_error() {
        let err = Corpus::from_json(r#"{"books": [{"name": "창"}]}"#).unwrap_err();
        assert!(matches!(err, Error::CorpusLoad { .. }));
    }

    #[test]
    fn test_duplicate_verse_is_load_error() {
        let json = r#"{"books": [{"name": "창", "chapters": [
            {"chapter": 1, "verses": [{"verse": 1, "text": "a"}, {"verse": "1", "text": "b"}]}
        ]}]}"#;
        let err = Corpus::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate verse 1"));
    }

    #[test]
    fn test_zero_chapter_is_load_error() {
        let json = r#"{"books": [{"name": "창", "chapters": [{"chapter": 0, "verses": []}]}]}"#;
        assert!(Corpus::from_json(json).is_err());
    }

    #[test]
    fn test_suggest_from_full_name() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        assert_eq!(corpus.suggest("창세기"), Some("창"));
        assert_eq!(corpus.suggest(""), None);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Corpus::from_path("/nonexistent/versedeck/KorRV.json").unwrap_err();
        assert!(matches!(err, Error::CorpusLoad { path: Some(_), .. }));
    }
}
