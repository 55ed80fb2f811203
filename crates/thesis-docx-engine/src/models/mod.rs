pub mod chapter_file;
pub mod variant;

pub use chapter_file::{ChapterFile, chapters_of};
pub use variant::{Variant, VariantProfile};
