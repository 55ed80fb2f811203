use crate::parsing::inline::kinds::Emphasis;

/// A whole line wrapped in bold delimiters, such as `**Research Question**`.
///
/// Treated as a standalone emphasized paragraph rather than inline bold: every
/// `**` in the line is removed and the remainder is bold as a whole.
pub struct EmphasisLine;

impl EmphasisLine {
    pub fn parse(line: &str) -> Option<String> {
        let strong = Emphasis::STRONG_TEXT;
        if line.starts_with(strong) && line.ends_with(strong) {
            Some(line.replace(strong, ""))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_strong_delimiter() {
        assert_eq!(
            EmphasisLine::parse("**Bold** and **more**"),
            Some("Bold and more".to_string())
        );
    }

    #[test]
    fn requires_both_ends() {
        assert_eq!(EmphasisLine::parse("**Bold** tail"), None);
        assert_eq!(EmphasisLine::parse("head **Bold**"), None);
    }
}
