use crate::parsing::blocks::types::HeadingLevel;

/// ATX heading block type with owned markers.
pub struct Heading;

impl Heading {
    /// Heading markers, longest first so `## ` is never read as `# `.
    pub const MARKERS: [(&'static str, HeadingLevel); 4] = [
        ("#### ", HeadingLevel::H4),
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];

    /// Returns the heading level and the text after the marker.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(marker).map(|text| (*level, text)))
    }
}
