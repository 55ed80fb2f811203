//! Read and update `00-session/session.json` of a research session.
//!
//! Only the fields this tool needs are typed. The rest of the document is
//! kept as a JSON value so a write-back never loses data owned by other
//! tools.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_DIR: &str = "00-session";
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read session file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse session file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode session: {0}")]
    Encode(serde_json::Error),
    #[error("Failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Number of chapters exported per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChapterCounts {
    pub english: usize,
    pub korean: usize,
}

/// Written to `outputs.word_documents` after a standard export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDocumentsRecord {
    /// Output path relative to the session directory.
    pub english: Option<String>,
    pub korean: Option<String>,
    /// UTC, millisecond precision, `Z` suffix.
    pub created_at: String,
    pub chapters: ChapterCounts,
}

impl WordDocumentsRecord {
    pub fn new(
        english: Option<String>,
        korean: Option<String>,
        chapters: ChapterCounts,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            english,
            korean,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            chapters,
        }
    }
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    doc: Value,
}

impl SessionStore {
    /// Opens the session file of `session_dir`.
    pub fn open(session_dir: &Path) -> Result<Self, SessionError> {
        let path = session_dir.join(SESSION_DIR).join(SESSION_FILE);
        if !path.exists() {
            return Err(SessionError::NotFound(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| SessionError::Read {
            path: path.clone(),
            source,
        })?;
        let doc = serde_json::from_str(&content).map_err(|source| SessionError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, doc })
    }

    /// `research.topic`, when present and non-empty.
    pub fn topic(&self) -> Option<&str> {
        self.research_field("topic")
    }

    pub fn topic_slug(&self) -> Option<&str> {
        self.research_field("topic_slug")
    }

    fn research_field(&self, key: &str) -> Option<&str> {
        self.doc
            .get("research")?
            .get(key)?
            .as_str()
            .filter(|s| !s.trim().is_empty())
    }

    /// Stores the record under `outputs.word_documents` and writes the file.
    pub fn record_word_documents(
        &mut self,
        record: &WordDocumentsRecord,
    ) -> Result<(), SessionError> {
        let value = serde_json::to_value(record).map_err(SessionError::Encode)?;

        if !self.doc.is_object() {
            self.doc = Value::Object(Map::new());
        }
        if let Some(root) = self.doc.as_object_mut() {
            let outputs = root
                .entry("outputs")
                .or_insert_with(|| Value::Object(Map::new()));
            if !outputs.is_object() {
                *outputs = Value::Object(Map::new());
            }
            if let Some(outputs) = outputs.as_object_mut() {
                outputs.insert("word_documents".to_string(), value);
            }
        }

        self.save()
    }

    fn save(&self) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(&self.doc).map_err(SessionError::Encode)?;
        fs::write(&self.path, content).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
