//! # thesis-docx engine
//!
//! Converts dissertation chapter markdown into Word documents.
//!
//! - **`parsing`**: Line classification and inline emphasis
//! - **`claims`**: Claim block extraction, registry and endnotes appendix
//! - **`assemble`**: Title page, chapter order and page breaks per variant
//! - **`render`**: DOCX and JSON output
//! - **`io`**: Chapter discovery, output writing and the session file
//! - **`models`**: Chapter files and document variants

pub mod assemble;
pub mod claims;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod test_support;

// Re-export key types for easier usage
pub use assemble::{AssembledDocument, Assembler, Chapter, ExportMode, TitlePage};
pub use claims::{ClaimEntry, ClaimsRegistry, ExtractWarning, Summary};
pub use io::{IoError, SessionError, SessionStore};
pub use models::{ChapterFile, Variant, VariantProfile};
pub use parsing::{Block, BlockClassifier, HeadingLevel, Indent, Run};
pub use render::RenderError;
