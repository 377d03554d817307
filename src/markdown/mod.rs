//! Markdown-lite rendering of model output.
//!
//! The generative endpoints return a small Markdown subset (headings,
//! lists, blockquotes, bold, fenced code). [`render`] converts that text
//! into an ordered sequence of [`DocumentBlock`]s for display without
//! implementing a general Markdown parser. Tables, links, images and
//! nested blockquotes are deliberately out of scope.

mod ast;
mod inline;
mod parser;

pub use ast::{DocumentBlock, InlineSpan};
pub use inline::parse_inline;
pub use parser::render;
