//! # Block Classification
//!
//! Line-by-line classification of chapter markdown into [`Block`]s.
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `HeadingLevel`, `Indent`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, ListItem,
//!   TableRow, EmphasisLine, NoteReference, ThematicBreak)
//! - **`classify`**: `BlockClassifier`, first-match rule dispatch per line
//!
//! ## Key Invariants
//!
//! - One input line produces at most one block; there is no lookahead
//! - Unrecognised lines degrade to styled paragraphs, never to errors
//! - Only non-blank, non-rule lines with residual text produce blocks

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::BlockClassifier;
pub use types::{Block, HeadingLevel, Indent};
