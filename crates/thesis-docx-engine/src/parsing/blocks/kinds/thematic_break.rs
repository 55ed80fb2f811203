/// Horizontal rule. Rules carry no content and produce no block.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    /// `trimmed` is the line with surrounding whitespace removed.
    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
