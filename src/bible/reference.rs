//! Reference token parsing.
//!
//! Parsing is two-stage: [`parse_syntax`] tokenizes a reference like `창1:1-5`
//! into letters, digits and punctuation and checks the grammar without
//! touching any data; [`parse_reference`] then validates the book and chapter
//! against a [`Corpus`] and produces a [`RangeDescriptor`].

use std::fmt;

use super::corpus::{Book, Corpus};
use crate::error::{Error, Result};

/// One lexical unit of a reference token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// A run of letters (the book name).
    Letters(String),
    /// A run of ASCII digits.
    Number(u32),
    /// `:`
    Colon,
    /// `-`
    Dash,
}

/// Upper bound of a verse range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseEnd {
    /// Range ends in the starting chapter.
    Verse(u32),
    /// Range ends in a later chapter.
    ChapterVerse(u32, u32),
}

/// Verse part of a reference (`:16`, `:1-5`, `:30-2:3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseSpec {
    /// First verse.
    pub start: u32,
    /// Explicit end, if any.
    pub end: Option<VerseEnd>,
}

/// Grammar-level view of a reference, before any dataset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSyntax {
    /// Book letters as typed.
    pub book: String,
    /// Chapter number, absent for a whole-book reference.
    pub chapter: Option<u32>,
    /// Verse range, absent for a whole-chapter reference.
    pub verses: Option<VerseSpec>,
}

/// End position of a resolved range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// Single-chapter range ending at this verse.
    Verse(u32),
    /// Multi-chapter range ending at (chapter, verse).
    ChapterVerse {
        /// Last chapter.
        chapter: u32,
        /// Last verse in that chapter.
        verse: u32,
    },
}

/// A normalized reference bound to a book of the corpus.
#[derive(Debug, Clone)]
pub struct RangeDescriptor<'a> {
    /// The token this range was parsed from.
    pub token: String,
    /// The referenced book.
    pub book: &'a Book,
    /// First chapter.
    pub start_chapter: u32,
    /// First verse in the first chapter.
    pub start_verse: u32,
    /// End position.
    pub end: RangeEnd,
}

impl RangeDescriptor<'_> {
    /// Last chapter covered by the range.
    pub const fn end_chapter(&self) -> u32 {
        match self.end {
            RangeEnd::Verse(_) => self.start_chapter,
            RangeEnd::ChapterVerse { chapter, .. } => chapter,
        }
    }

    /// Last verse in the last chapter.
    pub const fn end_verse(&self) -> u32 {
        match self.end {
            RangeEnd::Verse(verse) | RangeEnd::ChapterVerse { verse, .. } => verse,
        }
    }
}

impl fmt::Display for RangeDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}-", self.book.name, self.start_chapter, self.start_verse)?;
        match self.end {
            RangeEnd::Verse(v) => write!(f, "{v}"),
            RangeEnd::ChapterVerse { chapter, verse } => write!(f, "{chapter}:{verse}"),
        }
    }
}

/// Split a token into letters, numbers and punctuation.
pub fn tokenize(token: &str) -> Result<Vec<Lexeme>> {
    let mut lexemes = Vec::new();
    let mut chars = token.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            let n = digits
                .parse::<u32>()
                .map_err(|_| Error::parse(token, format!("number '{digits}' is too large")))?;
            lexemes.push(Lexeme::Number(n));
        } else if c.is_alphabetic() {
            let mut letters = String::new();
            while let Some(&l) = chars.peek() {
                if !l.is_alphabetic() {
                    break;
                }
                letters.push(l);
                chars.next();
            }
            lexemes.push(Lexeme::Letters(letters));
        } else {
            chars.next();
            match c {
                ':' => lexemes.push(Lexeme::Colon),
                '-' => lexemes.push(Lexeme::Dash),
                other => {
                    return Err(Error::parse(token, format!("unexpected character '{other}'")));
                }
            }
        }
    }

    Ok(lexemes)
}

/// Check a token against the reference grammar without consulting any data.
///
/// `<letters><digits>?(":"<digits>("-"<digits>(":"<digits>)?)?)?`
pub fn parse_syntax(token: &str) -> Result<ReferenceSyntax> {
    let lexemes = tokenize(token)?;
    let mut iter = lexemes.into_iter();

    let Some(Lexeme::Letters(book)) = iter.next() else {
        return Err(Error::parse(token, "reference must start with a book name"));
    };

    let chapter = match iter.next() {
        None => return Ok(ReferenceSyntax { book, chapter: None, verses: None }),
        Some(Lexeme::Number(n)) => n,
        Some(_) => return Err(Error::parse(token, "expected a chapter number after the book")),
    };

    let verses = match iter.next() {
        None => None,
        Some(Lexeme::Colon) => Some(parse_verse_spec(token, &mut iter)?),
        Some(_) => return Err(Error::parse(token, "expected ':' after the chapter")),
    };

    if iter.next().is_some() {
        return Err(Error::parse(token, "unexpected text after the reference"));
    }

    Ok(ReferenceSyntax { book, chapter: Some(chapter), verses })
}

fn parse_verse_spec(
    token: &str,
    iter: &mut impl Iterator<Item = Lexeme>,
) -> Result<VerseSpec> {
    let Some(Lexeme::Number(start)) = iter.next() else {
        return Err(Error::parse(token, "expected a verse number after ':'"));
    };

    // Only a dash may follow a starting verse.
    let mut rest = iter.peekable();
    if rest.peek() != Some(&Lexeme::Dash) {
        return match rest.next() {
            None => Ok(VerseSpec { start, end: None }),
            Some(_) => Err(Error::parse(token, "expected '-' after the verse")),
        };
    }
    rest.next();

    let Some(Lexeme::Number(first)) = rest.next() else {
        return Err(Error::parse(token, "expected a verse number after '-'"));
    };

    let end = match rest.next() {
        None => VerseEnd::Verse(first),
        Some(Lexeme::Colon) => {
            let Some(Lexeme::Number(verse)) = rest.next() else {
                return Err(Error::parse(token, "expected a verse number after ':'"));
            };
            VerseEnd::ChapterVerse(first, verse)
        }
        Some(_) => return Err(Error::parse(token, "unexpected text after the verse range")),
    };

    Ok(VerseSpec { start, end: Some(end) })
}

/// Parse a token and bind it to a book of `corpus`.
///
/// Without a chapter the whole book is selected; without verses the whole
/// chapter. A reversed verse range (`창1:3-1`) is accepted and later
/// resolves to no verses.
pub fn parse_reference<'a>(token: &str, corpus: &'a Corpus) -> Result<RangeDescriptor<'a>> {
    let syntax = parse_syntax(token)?;

    let book = corpus.find_book(&syntax.book).ok_or_else(|| Error::BookNotFound {
        token: token.to_string(),
        book: syntax.book.clone(),
        suggestion: corpus.suggest(&syntax.book).map(str::to_string),
    })?;

    let chapter_not_found = |chapter| Error::ChapterNotFound {
        token: token.to_string(),
        book: book.name.clone(),
        chapter,
    };

    let descriptor = |start_chapter, start_verse, end| RangeDescriptor {
        token: token.to_string(),
        book,
        start_chapter,
        start_verse,
        end,
    };

    let Some(chapter) = syntax.chapter else {
        let last = book.last_chapter().ok_or_else(|| chapter_not_found(1))?;
        return Ok(descriptor(
            1,
            1,
            RangeEnd::ChapterVerse { chapter: last.number, verse: last.last_verse().unwrap_or(0) },
        ));
    };

    let Some(verses) = syntax.verses else {
        let data = book.chapter(chapter).ok_or_else(|| chapter_not_found(chapter))?;
        return Ok(descriptor(chapter, 1, RangeEnd::Verse(data.last_verse().unwrap_or(0))));
    };

    let end = match verses.end {
        None => RangeEnd::Verse(verses.start),
        Some(VerseEnd::Verse(v)) => RangeEnd::Verse(v),
        Some(VerseEnd::ChapterVerse(end_chapter, verse)) if end_chapter == chapter => {
            RangeEnd::Verse(verse)
        }
        Some(VerseEnd::ChapterVerse(end_chapter, verse)) => {
            book.chapter(end_chapter).ok_or_else(|| chapter_not_found(end_chapter))?;
            RangeEnd::ChapterVerse { chapter: end_chapter, verse }
        }
    };

    let parsed = descriptor(chapter, verses.start, end);
    tracing::debug!("Parsed '{token}' as {parsed}");
    Ok(parsed)
}
