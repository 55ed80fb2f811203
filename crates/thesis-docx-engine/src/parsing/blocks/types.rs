use serde::Serialize;

use crate::parsing::inline::Run;

/// Heading depth. Chapter markdown uses `#` through `####`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// 1-based numeric level.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

/// Left indentation of appendix detail lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Indent {
    None,
    /// Labelled claim fields.
    Field,
    /// Verbatim lines of the claim's source block.
    Source,
}

/// One typed unit of output.
///
/// Blocks carry no nesting; their order in the sequence is the only
/// relationship between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Document title on the title page.
    Title { text: String },
    /// The variant's subtitle line under the title.
    Subtitle { text: String },
    /// A centered plain line on the title page.
    Centered { text: String },
    Heading { level: HeadingLevel, text: String },
    /// A line wrapped entirely in `**`, rendered as a bold standalone paragraph.
    EmphasisParagraph { text: String },
    StyledParagraph { runs: Vec<Run> },
    ListItem { runs: Vec<Run>, ordered: bool },
    /// A pipe-table row, passed through verbatim.
    RawLine { text: String },
    /// An endnote reference marker `[^N]`.
    NoteReference { number: u32 },
    /// A line of the claims appendix.
    Detail { runs: Vec<Run>, indent: Indent },
    /// Page break.
    Break,
}
