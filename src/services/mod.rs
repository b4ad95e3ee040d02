//! Service modules for the generation pipeline.
//!
//! `scripture` turns batch input into a deck of pages; `slides` is the seam
//! through which a renderer turns that deck into a document.

pub mod scripture;
pub mod slides;
