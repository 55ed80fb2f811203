pub mod session;

use crate::models::ChapterFile;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub use session::{ChapterCounts, SessionError, SessionStore, WordDocumentsRecord};

/// Chapter files are named `ch*.md`.
pub const CHAPTER_PREFIX: &str = "ch";
pub const CHAPTER_EXTENSION: &str = ".md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid thesis directory: {0}")]
    InvalidThesisDir(PathBuf),
}

/// Read a chapter and return its content
pub fn read_chapter(chapter: &ChapterFile, thesis_dir: &Path) -> Result<String, IoError> {
    let absolute_path = chapter.relative_path().to_path(thesis_dir);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write rendered bytes, creating parent directories as needed
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, bytes).map_err(IoError::Io)
}

/// List chapter files directly inside the thesis directory, sorted by name.
///
/// Subdirectories are not searched.
pub fn list_chapters(thesis_dir: &Path) -> Result<Vec<ChapterFile>, IoError> {
    if !thesis_dir.is_dir() {
        return Err(IoError::InvalidThesisDir(thesis_dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(thesis_dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        if !entry.file_type().map_err(IoError::Io)?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if is_chapter_name(&name) {
            names.push(name);
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| ChapterFile::new(RelativePathBuf::from(name)))
        .collect())
}

fn is_chapter_name(name: &str) -> bool {
    name.starts_with(CHAPTER_PREFIX) && name.ends_with(CHAPTER_EXTENSION)
}
