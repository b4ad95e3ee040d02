//! Application error types.
//!
//! Every failure carries enough context (the offending token, the missing
//! book or chapter, the path that could not be written) for a host to show a
//! precise message.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Grammar shown to users when a reference token fails to parse.
pub const REFERENCE_GRAMMAR: &str =
    "<book><chapter>[:<verse>[-<verse>]] or <book><chapter>:<verse>-<chapter>:<verse>, e.g. 창1:1-5, 요3:16, 시23";

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus dataset could not be read or is malformed. Fatal at startup.
    #[error("Failed to load corpus{}: {message}", fmt_path(.path.as_ref()))]
    CorpusLoad {
        /// Dataset location, if loaded from disk.
        path: Option<PathBuf>,
        /// Description of what was missing or invalid.
        message: String,
    },

    /// A reference token does not follow the reference grammar.
    #[error("Cannot parse reference '{token}': {message} (expected {})", REFERENCE_GRAMMAR)]
    Parse {
        /// The token as typed.
        token: String,
        /// What went wrong.
        message: String,
    },

    /// The book part of a reference is not a known short name.
    #[error("Book '{book}' in '{token}' not found{}", fmt_suggestion(.suggestion.as_deref()))]
    BookNotFound {
        /// The token as typed.
        token: String,
        /// The book letters extracted from the token.
        book: String,
        /// Closest known short name, for display only.
        suggestion: Option<String>,
    },

    /// The book exists but the requested chapter does not.
    #[error("Chapter {chapter} of '{book}' in '{token}' not found")]
    ChapterNotFound {
        /// The token as typed.
        token: String,
        /// Canonical short name of the book.
        book: String,
        /// The missing chapter number.
        chapter: u32,
    },

    /// A reference parsed and resolved but selected no verses.
    #[error("Reference '{token}' does not contain any verses")]
    EmptyReference {
        /// The token as typed.
        token: String,
    },

    /// The batch input contained no reference tokens.
    #[error("No references given. Enter one or more references such as 요3:16")]
    EmptyBatch,

    /// The rendered document could not be written (e.g. the file is open elsewhere).
    #[error("Cannot write {path:?}: {source}. Close the file if it is open and try again")]
    ArtifactWrite {
        /// Output file path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" from {}", p.display())).unwrap_or_default()
}

fn fmt_suggestion(suggestion: Option<&str>) -> String {
    suggestion.map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
}

impl Error {
    /// Create a corpus load error with optional path context
    pub fn corpus(message: impl Into<String>, path: impl Into<Option<PathBuf>>) -> Self {
        Self::CorpusLoad { path: path.into(), message: message.into() }
    }

    /// Create a parse error for a reference token
    pub fn parse(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse { token: token.into(), message: message.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// The reference token this error is about, if it is a per-token failure.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Parse { token, .. }
            | Self::BookNotFound { token, .. }
            | Self::ChapterNotFound { token, .. }
            | Self::EmptyReference { token } => Some(token),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
