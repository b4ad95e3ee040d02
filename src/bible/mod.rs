//! Scripture corpus, reference parsing and verse resolution.

pub mod corpus;
pub mod names;
pub mod reference;
pub mod resolver;

pub use corpus::{Book, Chapter, Corpus, Verse};
pub use reference::{parse_reference, parse_syntax, RangeDescriptor, RangeEnd};
pub use resolver::resolve;
