//! # Claims
//!
//! Extraction of embedded claim blocks and the endnote registry built from
//! them.
//!
//! A claim block is a fenced YAML region inside chapter markdown:
//!
//! ````text
//! ```yaml
//! id: "C1"
//! text: "Test claim"
//! claim_type: empirical
//! confidence: 80
//! pTCS: 70
//! ```
//! ````
//!
//! ## Modules
//!
//! - **`fence`**: `extract_claims()` replaces each claim block with a `[^N]`
//!   reference line and records it in the registry
//! - **`fields`**: Structured reading of the five consumed fields
//! - **`registry`**: `ClaimsRegistry`, numbering and summary statistics
//! - **`appendix`**: Endnotes appendix blocks
//!
//! ## Key Invariants
//!
//! - Claim numbers are `1..=N` with no gaps, in chapter order then line order
//! - A block without an `id` produces neither an entry nor a reference line

pub mod appendix;
pub mod fence;
pub mod fields;
pub mod registry;

pub use appendix::render_appendix;
pub use fence::{ClaimFence, ExtractWarning, Extraction, extract_claims};
pub use fields::{ClaimFields, parse_fields};
pub use registry::{ClaimEntry, ClaimsRegistry, NewClaim, Summary};
