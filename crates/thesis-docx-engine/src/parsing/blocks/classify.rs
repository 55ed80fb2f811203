use crate::parsing::inline::{Run, format_inline};

use super::{
    kinds::{EmphasisLine, Heading, ListItem, NoteReference, TableRow, ThematicBreak},
    types::Block,
};

/// Classifies chapter lines into [`Block`]s.
///
/// Each line is classified on its own, first matching rule wins:
///
/// 1. blank or `---` → nothing
/// 2. `[^N]` → `NoteReference` (only when note references are enabled)
/// 3. `#### ` .. `# ` → `Heading`
/// 4. `**...**` → `EmphasisParagraph`, even when nothing is left between
///    the delimiters
/// 5. `- ` / `* ` → unordered `ListItem` with the text after the bullet
/// 6. `| ` → `RawLine`
/// 7. `1. ` → ordered `ListItem` with the full line
/// 8. anything else → `StyledParagraph` from the inline formatter
///
/// Lines never merge; one line produces at most one block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockClassifier {
    note_references: bool,
}

impl BlockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier that also recognises endnote reference lines produced by
    /// claim extraction.
    pub fn with_note_references() -> Self {
        Self {
            note_references: true,
        }
    }

    pub fn classify(&self, text: &str) -> Vec<Block> {
        text.split('\n')
            .filter_map(|line| self.classify_line(line))
            .collect()
    }

    pub fn classify_line(&self, line: &str) -> Option<Block> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim();
        if trimmed.is_empty() || ThematicBreak::matches(trimmed) {
            return None;
        }

        if self.note_references
            && let Some(number) = NoteReference::parse(line)
        {
            return Some(Block::NoteReference { number });
        }

        if let Some((level, text)) = Heading::parse(line) {
            return Some(Block::Heading {
                level,
                text: text.to_string(),
            });
        }

        if let Some(text) = EmphasisLine::parse(line) {
            return Some(Block::EmphasisParagraph { text });
        }

        if let Some(text) = ListItem::unordered(line) {
            return Some(Block::ListItem {
                runs: verbatim(text),
                ordered: false,
            });
        }

        if TableRow::matches(line) {
            return Some(Block::RawLine {
                text: line.to_string(),
            });
        }

        if ListItem::is_ordered(line) {
            return Some(Block::ListItem {
                runs: verbatim(line),
                ordered: true,
            });
        }

        let runs = format_inline(line);
        (!runs.is_empty()).then_some(Block::StyledParagraph { runs })
    }
}

/// List text is not scanned for emphasis.
fn verbatim(text: &str) -> Vec<Run> {
    if text.is_empty() {
        vec![]
    } else {
        vec![Run::plain(text)]
    }
}
