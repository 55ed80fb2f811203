use crate::parsing::{Block, HeadingLevel, Indent, Run};

use super::registry::{ClaimEntry, ClaimsRegistry, Summary};

/// Source lines shown per claim before the rest is elided.
pub const SOURCE_PREVIEW_LINES: usize = 15;

/// Shown in place of a field the claim block did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

pub const APPENDIX_TITLE: &str = "Endnotes: Claims Registry";
pub const SUMMARY_TITLE: &str = "Claims Registry Summary";
pub const TRUNCATION_NOTICE: &str = "... (see full metadata in source files)";

const INTRODUCTION: &str = "This section contains the complete GroundedClaim metadata for all \
claims referenced in the dissertation. Each claim includes its ID, type, confidence score, pTCS \
(predicted Thesis Confidence Score), sources, and uncertainty acknowledgment.";

/// Builds the endnotes appendix: a page with every claim, then a page with
/// summary statistics.
///
/// An empty registry has no appendix.
pub fn render_appendix(registry: &ClaimsRegistry) -> Vec<Block> {
    let Some(summary) = registry.summary() else {
        return vec![];
    };

    let mut out = vec![
        Block::Break,
        Block::Heading {
            level: HeadingLevel::H1,
            text: APPENDIX_TITLE.to_string(),
        },
        Block::StyledParagraph {
            runs: vec![Run::plain(INTRODUCTION)],
        },
    ];
    for entry in registry.all() {
        push_entry(&mut out, entry);
    }
    push_summary(&mut out, &summary);
    out
}

fn push_entry(out: &mut Vec<Block>, entry: &ClaimEntry) {
    out.push(detail(
        Indent::None,
        vec![
            Run::superscript(format!("[{}] ", entry.number)).emboldened(),
            Run::bold(format!("Claim {}", entry.id)),
        ],
    ));
    out.push(detail(
        Indent::Field,
        vec![Run::bold("Text: "), Run::plain(or_na(entry.text.as_deref()))],
    ));
    out.push(detail(
        Indent::Field,
        vec![
            Run::bold("Type: "),
            Run::plain(or_na(entry.claim_type.as_deref())),
        ],
    ));
    out.push(detail(
        Indent::Field,
        vec![
            Run::bold("Confidence: "),
            Run::plain(format!("{}  |  ", score(entry.confidence))),
            Run::bold("pTCS: "),
            Run::plain(score(entry.ptcs)),
        ],
    ));

    let lines: Vec<&str> = entry.raw_block.split('\n').collect();
    for line in lines.iter().take(SOURCE_PREVIEW_LINES) {
        out.push(detail(Indent::Source, vec![Run::plain(*line)]));
    }
    if lines.len() > SOURCE_PREVIEW_LINES {
        out.push(detail(Indent::Source, vec![Run::italic(TRUNCATION_NOTICE)]));
    }
}

fn push_summary(out: &mut Vec<Block>, summary: &Summary) {
    out.push(Block::Break);
    out.push(Block::Heading {
        level: HeadingLevel::H2,
        text: SUMMARY_TITLE.to_string(),
    });
    for line in [
        format!("Total Claims: {}", summary.count),
        format!("Average Confidence: {}", score(summary.mean_confidence)),
        format!("Average pTCS: {}", score(summary.mean_ptcs)),
    ] {
        out.push(detail(Indent::None, vec![Run::bold(line)]));
    }
}

fn detail(indent: Indent, runs: Vec<Run>) -> Block {
    Block::Detail { runs, indent }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn score(value: Option<i64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}
