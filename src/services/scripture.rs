//! Scripture batch service.
//!
//! Runs parse → resolve → paginate for every reference in a batch. A batch is
//! all-or-nothing: the first failing reference aborts it and nothing is
//! returned but the error.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::bible::{parse_reference, resolve, Corpus, Verse};
use crate::error::{Error, Result};
use crate::layout::{paginate_with, CharsPerLine, LayoutConfig, LineEstimator, Page};

/// Delimiters between references in batch input.
#[allow(clippy::expect_used)]
static RE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,\s]+").expect("valid regex: RE_DELIMITER")
});

/// The verses selected by one reference token.
#[derive(Debug, Clone)]
pub struct Passage {
    /// The token as typed.
    pub token: String,
    /// Canonical short name of the book.
    pub book: String,
    /// Full book name for titles.
    pub display_name: String,
    /// Verses in (chapter, verse) order.
    pub verses: Vec<Verse>,
}

/// Trait for scripture lookup providers.
///
/// The in-memory [`Corpus`] is the standard provider; tests and hosts can
/// substitute their own.
pub trait ScriptureProvider {
    /// Look up the verses for one reference token.
    fn lookup(&self, token: &str) -> Result<Passage>;
}

impl ScriptureProvider for Corpus {
    fn lookup(&self, token: &str) -> Result<Passage> {
        let range = parse_reference(token, self)?;
        let verses = resolve(&range)?;
        Ok(Passage {
            token: token.to_string(),
            book: range.book.name.clone(),
            display_name: range.book.display_name.clone(),
            verses,
        })
    }
}

impl<T: ScriptureProvider + ?Sized> ScriptureProvider for Arc<T> {
    fn lookup(&self, token: &str) -> Result<Passage> {
        (**self).lookup(token)
    }
}

impl<T: ScriptureProvider + ?Sized> ScriptureProvider for &T {
    fn lookup(&self, token: &str) -> Result<Passage> {
        (**self).lookup(token)
    }
}

/// Pages generated for one reference of a batch.
#[derive(Debug, Clone)]
pub struct DeckSection {
    /// The token as typed.
    pub token: String,
    /// Canonical short name of the book.
    pub book: String,
    /// Pages in order.
    pub pages: Vec<Page>,
}

/// The combined output of a batch, ready for a renderer.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// One section per reference, in input order.
    pub sections: Vec<DeckSection>,
}

impl Deck {
    /// All pages in order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.sections.iter().flat_map(|s| s.pages.iter())
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(|s| s.pages.len()).sum()
    }
}

/// Split raw batch input on commas and whitespace.
pub fn split_batch(input: &str) -> Result<Vec<&str>> {
    let tokens: Vec<&str> = RE_DELIMITER
        .split(input)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(Error::EmptyBatch);
    }
    Ok(tokens)
}

/// Generates decks from batch input against a scripture provider.
pub struct ScriptureService<P> {
    provider: P,
}

impl<P: ScriptureProvider> ScriptureService<P> {
    /// Create a service backed by `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Access the underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Split `input` into references and build one combined deck.
    pub fn generate(&self, input: &str, config: &LayoutConfig) -> Result<Deck> {
        let tokens = split_batch(input)?;
        self.generate_tokens(&tokens, config, &CharsPerLine(config.chars_per_line))
    }

    /// Build a deck from already-split tokens with a custom line estimator.
    pub fn generate_tokens(
        &self,
        tokens: &[&str],
        config: &LayoutConfig,
        estimator: &dyn LineEstimator,
    ) -> Result<Deck> {
        if tokens.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut deck = Deck::default();
        for token in tokens {
            let passage = self.provider.lookup(token)?;
            if passage.verses.is_empty() {
                return Err(Error::EmptyReference { token: passage.token });
            }
            let pages = paginate_with(&passage.display_name, &passage.verses, config, estimator);
            tracing::debug!("'{token}' produced {} pages", pages.len());
            deck.sections.push(DeckSection {
                token: passage.token,
                book: passage.book,
                pages,
            });
        }

        tracing::info!(
            "Generated {} pages from {} references",
            deck.page_count(),
            deck.sections.len()
        );
        Ok(deck)
    }
}
