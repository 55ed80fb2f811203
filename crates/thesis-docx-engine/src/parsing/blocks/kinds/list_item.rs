use std::sync::OnceLock;

use regex::Regex;

/// List item block type with owned markers.
pub struct ListItem;

impl ListItem {
    /// Unordered list bullets, each followed by one space.
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Returns the text after an unordered bullet.
    pub fn unordered(line: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|bullet| line.strip_prefix(bullet))
    }

    /// True for `1. text`, `12. text`, ... The number stays part of the text.
    pub fn is_ordered(line: &str) -> bool {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        ORDERED
            .get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("Invalid ordered list regex"))
            .is_match(line)
    }
}
