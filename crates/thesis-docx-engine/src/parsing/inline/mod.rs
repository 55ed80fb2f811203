//! # Inline Formatting
//!
//! Splits one line of chapter text into styled [`Run`]s.
//!
//! ## Architecture
//!
//! A single left-to-right scan over the line with an accumulation buffer for
//! plain text. Emphasis is flat: a bold or italic region never contains
//! another region, and the scan resumes after the closing delimiter.
//!
//! ## Modules
//!
//! - **`types`**: `Run` (text plus bold/italic/superscript flags)
//! - **`kinds`**: Inline types with owned delimiters (`Emphasis`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `format_inline()` main entry point
//!
//! ## Malformed Emphasis
//!
//! An opening delimiter without a closer is not an error: the region runs to
//! the end of the line. `**x` yields a single bold run `x`, `*y` a single
//! italic run `y`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::Run;
