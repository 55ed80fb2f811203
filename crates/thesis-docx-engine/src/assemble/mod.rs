//! # Assemble
//!
//! Turns an ordered set of chapter texts into the finished block sequence of
//! one document variant: title page, chapters separated by page breaks and,
//! in endnotes mode, the claims appendix.
//!
//! The claims registry lives for exactly one `assemble` call. It is created
//! here, filled chapter by chapter and handed back inside the
//! [`AssembledDocument`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::claims::{ClaimsRegistry, ExtractWarning, extract_claims, render_appendix};
use crate::models::{Variant, VariantProfile};
use crate::parsing::{Block, BlockClassifier};

/// Title used when the session has no research topic.
pub const DEFAULT_TITLE: &str = "Doctoral Dissertation";

/// How chapters are turned into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportMode {
    /// Chapter text is classified as-is; claim blocks stay in the body.
    Standard,
    /// Claim blocks become endnote references and the given variant gets an
    /// appendix.
    Endnotes(Variant),
}

impl ExportMode {
    fn extracts_claims_for(self, variant: Variant) -> bool {
        matches!(self, ExportMode::Endnotes(v) if v == variant)
    }
}

/// Metadata shown on the first page of every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePage {
    pub title: String,
    pub date: NaiveDate,
}

impl TitlePage {
    pub fn new(title: Option<String>, date: NaiveDate) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self { title, date }
    }

    /// Month and year in the variant's language.
    pub fn date_line(&self, profile: &VariantProfile) -> String {
        if profile.is_korean() {
            format!("{}년 {}월", self.date.year(), self.date.month())
        } else {
            self.date.format("%B %Y").to_string()
        }
    }

    fn blocks(&self, profile: &VariantProfile) -> Vec<Block> {
        vec![
            Block::Title {
                text: self.title.clone(),
            },
            Block::Subtitle {
                text: profile.subtitle.clone(),
            },
            Block::Centered {
                text: self.date_line(profile),
            },
            Block::Break,
        ]
    }
}

/// Text of one chapter, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub name: String,
    pub text: String,
}

impl Chapter {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// The finished block sequence of one variant.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub variant: Variant,
    pub blocks: Vec<Block>,
    /// Claims extracted while assembling; empty in standard mode.
    pub claims: ClaimsRegistry,
    pub warnings: Vec<ExtractWarning>,
}

/// Builds documents sharing one title page.
#[derive(Debug, Clone)]
pub struct Assembler {
    title_page: TitlePage,
}

impl Assembler {
    pub fn new(title_page: TitlePage) -> Self {
        Self { title_page }
    }

    /// Assembles `chapters` in the given order. Chapter indices start at 1.
    pub fn assemble(
        &self,
        profile: &VariantProfile,
        chapters: &[Chapter],
        mode: ExportMode,
    ) -> AssembledDocument {
        let endnotes = mode.extracts_claims_for(profile.variant);
        let classifier = if endnotes {
            BlockClassifier::with_note_references()
        } else {
            BlockClassifier::new()
        };

        let mut registry = ClaimsRegistry::new();
        let mut warnings = vec![];
        let mut blocks = self.title_page.blocks(profile);

        for (idx, chapter) in chapters.iter().enumerate() {
            if idx > 0 {
                blocks.push(Block::Break);
            }
            let before = blocks.len();
            if endnotes {
                let index = idx as u32 + 1;
                let extraction = extract_claims(&chapter.text, index, &mut registry);
                warnings.extend(extraction.warnings);
                blocks.extend(classifier.classify(&extraction.text));
            } else {
                blocks.extend(classifier.classify(&chapter.text));
            }
            log::debug!(
                "{}: {} blocks ({} claims so far)",
                chapter.name,
                blocks.len() - before,
                registry.len()
            );
        }

        if endnotes {
            blocks.extend(render_appendix(&registry));
        }

        AssembledDocument {
            variant: profile.variant,
            blocks,
            claims: registry,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{HeadingLevel, Indent, Run};
    use pretty_assertions::assert_eq;

    fn assembler() -> Assembler {
        Assembler::new(TitlePage::new(
            Some("Free Will and Consciousness".to_string()),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        ))
    }

    fn claim(id: &str) -> String {
        format!("```yaml\nid: \"{id}\"\nconfidence: 80\npTCS: 70\n```")
    }

    #[test]
    fn title_page_in_english() {
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &[],
            ExportMode::Standard,
        );
        assert_eq!(
            doc.blocks,
            vec![
                Block::Title {
                    text: "Free Will and Consciousness".to_string()
                },
                Block::Subtitle {
                    text: "Doctoral Dissertation".to_string()
                },
                Block::Centered {
                    text: "January 2026".to_string()
                },
                Block::Break,
            ]
        );
    }

    #[test]
    fn title_page_in_korean() {
        let page = TitlePage::new(None, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(
            page.date_line(&Variant::Secondary.default_profile()),
            "2026년 1월"
        );
    }

    #[test]
    fn missing_or_blank_topic_uses_default_title() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(TitlePage::new(None, date).title, DEFAULT_TITLE);
        assert_eq!(TitlePage::new(Some("  ".into()), date).title, DEFAULT_TITLE);
    }

    #[test]
    fn breaks_only_between_chapters() {
        let chapters = vec![
            Chapter::new("chapter1.md", "# One"),
            Chapter::new("chapter2.md", "# Two"),
        ];
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &chapters,
            ExportMode::Standard,
        );
        assert_eq!(
            &doc.blocks[4..],
            &[
                Block::Heading {
                    level: HeadingLevel::H1,
                    text: "One".to_string()
                },
                Block::Break,
                Block::Heading {
                    level: HeadingLevel::H1,
                    text: "Two".to_string()
                },
            ]
        );
    }

    #[test]
    fn standard_mode_leaves_claim_blocks_in_text() {
        let chapters = vec![Chapter::new("chapter1.md", claim("C1"))];
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &chapters,
            ExportMode::Standard,
        );
        assert!(doc.claims.is_empty());
        assert!(doc.blocks.contains(&Block::StyledParagraph {
            runs: vec![Run::plain("id: \"C1\"")]
        }));
        assert!(!doc.blocks.iter().any(|b| matches!(b, Block::NoteReference { .. })));
    }

    #[test]
    fn endnotes_mode_numbers_claims_across_chapters() {
        let chapters = vec![
            Chapter::new("chapter1.md", format!("Intro\n{}\n{}", claim("C1"), claim("C2"))),
            Chapter::new("chapter2.md", claim("C3")),
        ];
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &chapters,
            ExportMode::Endnotes(Variant::Primary),
        );

        let numbers: Vec<u32> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::NoteReference { number } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let chapters_of_claims: Vec<u32> = doc.claims.all().iter().map(|e| e.chapter).collect();
        assert_eq!(chapters_of_claims, vec![1, 1, 2]);

        assert!(doc.blocks.contains(&Block::Heading {
            level: HeadingLevel::H2,
            text: "Claims Registry Summary".to_string()
        }));
        assert!(doc.blocks.contains(&Block::Detail {
            runs: vec![Run::bold("Total Claims: 3")],
            indent: Indent::None
        }));
    }

    #[test]
    fn endnotes_without_claims_has_no_appendix() {
        let chapters = vec![Chapter::new("chapter1.md", "Just prose.")];
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &chapters,
            ExportMode::Endnotes(Variant::Primary),
        );
        assert_eq!(doc.blocks.last(), Some(&Block::StyledParagraph {
            runs: vec![Run::plain("Just prose.")]
        }));
    }

    #[test]
    fn endnotes_for_other_variant_is_standard() {
        let chapters = vec![Chapter::new("chapter1-ko.md", claim("C1"))];
        let doc = assembler().assemble(
            &Variant::Secondary.default_profile(),
            &chapters,
            ExportMode::Endnotes(Variant::Primary),
        );
        assert!(doc.claims.is_empty());
    }

    #[test]
    fn unterminated_fence_is_reported() {
        let chapters = vec![
            Chapter::new("chapter1.md", "ok"),
            Chapter::new("chapter2.md", "before\n```yaml\nid: \"C9\""),
        ];
        let doc = assembler().assemble(
            &Variant::Primary.default_profile(),
            &chapters,
            ExportMode::Endnotes(Variant::Primary),
        );
        assert_eq!(
            doc.warnings,
            vec![ExtractWarning::UnterminatedFence {
                chapter: 2,
                line: 2
            }]
        );
        assert!(doc.claims.is_empty());
    }
}
