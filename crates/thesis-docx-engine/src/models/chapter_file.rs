use relative_path::{RelativePath, RelativePathBuf};

use super::variant::Variant;

/// A chapter markdown file found in the thesis directory.
///
/// The variant is decided once, when the file is discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    relative_path: RelativePathBuf,
    variant: Variant,
}

impl ChapterFile {
    /// Create from a path relative to the thesis directory.
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let variant = Variant::of_file_name(relative_path.file_name().unwrap_or_default());
        Self {
            relative_path,
            variant,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// File name, for progress output.
    pub fn display_name(&self) -> &str {
        self.relative_path.file_name().unwrap_or("Untitled")
    }
}

impl From<&str> for ChapterFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

/// Chapters of one variant, keeping their order.
pub fn chapters_of(files: &[ChapterFile], variant: Variant) -> Vec<ChapterFile> {
    files
        .iter()
        .filter(|f| f.variant() == variant)
        .cloned()
        .collect()
}
