//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The formatter calls these
//! constants; it never hardcodes `**` or `*`.

pub mod emphasis;

pub use emphasis::Emphasis;
