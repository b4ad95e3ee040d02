//! `VerseDeck` - Bible reference lookup and slide pagination.
//!
//! Parses compact references such as `창1:1-5`, resolves them against an
//! in-memory corpus, packs the verses into pages and renders a slide deck.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod pptx;
pub mod services;
