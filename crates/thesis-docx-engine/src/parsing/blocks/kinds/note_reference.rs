use std::sync::OnceLock;

use regex::Regex;

/// Endnote reference line `[^N]`, emitted by claim extraction in place of a
/// claim block.
pub struct NoteReference;

impl NoteReference {
    /// The reference line written for claim `number`.
    pub fn marker(number: u32) -> String {
        format!("[^{number}]")
    }

    /// Parses a line consisting solely of a reference marker.
    pub fn parse(line: &str) -> Option<u32> {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        let marker = MARKER
            .get_or_init(|| Regex::new(r"^\[\^([0-9]+)\]$").expect("Invalid note marker regex"));
        marker.captures(line)?.get(1)?.as_str().parse().ok()
    }
}
