use serde::Serialize;

/// A styled text fragment within one line.
///
/// Concatenating the `text` of every run produced for a line reproduces the
/// line with its emphasis delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Raised text, used for endnote markers.
    pub superscript: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            superscript: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn superscript(text: impl Into<String>) -> Self {
        Self {
            superscript: true,
            ..Self::plain(text)
        }
    }

    /// Marks this run bold as well, keeping its other flags.
    #[must_use]
    pub fn emboldened(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Joins the text of `runs`, ignoring style.
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
