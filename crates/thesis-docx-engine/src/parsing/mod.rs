//! # Chapter Parsing
//!
//! - **`inline`**: `format_inline()` splits a line into styled runs
//! - **`blocks`**: `BlockClassifier` turns chapter lines into blocks

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

pub use blocks::{Block, BlockClassifier, HeadingLevel, Indent};
pub use inline::{Run, format_inline};
