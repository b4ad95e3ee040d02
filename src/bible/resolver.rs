//! Expand a [`RangeDescriptor`] into the verses it covers.

use super::corpus::Verse;
use super::reference::RangeDescriptor;
use crate::error::{Error, Result};

/// Collect the verses of a range in (chapter, verse) order.
///
/// The first chapter starts at the descriptor's start verse, the last chapter
/// stops at its end verse, and chapters in between are taken whole. A missing
/// chapter fails the whole reference; a reversed range yields no verses.
pub fn resolve(range: &RangeDescriptor<'_>) -> Result<Vec<Verse>> {
    let first = range.start_chapter;
    let last = range.end_chapter();
    let mut verses = Vec::new();

    for number in first..=last {
        let chapter = range.book.chapter(number).ok_or_else(|| Error::ChapterNotFound {
            token: range.token.clone(),
            book: range.book.name.clone(),
            chapter: number,
        })?;

        let start = if number == first { range.start_verse } else { 1 };
        let end = if number == last {
            range.end_verse()
        } else {
            chapter.last_verse().unwrap_or(0)
        };

        verses.extend(chapter.verses_between(start, end).cloned());
    }

    tracing::debug!("Resolved {range} to {} verses", verses.len());
    Ok(verses)
}
