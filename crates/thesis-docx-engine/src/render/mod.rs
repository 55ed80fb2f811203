//! # Render
//!
//! Serialises an assembled block sequence.
//!
//! - **`docx`**: WordprocessingML package, the deliverable format
//! - **`json`**: The block sequence as JSON, for inspection and debugging

pub mod docx;
pub mod json;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to build document package: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
