use thiserror::Error;

use crate::parsing::blocks::kinds::NoteReference;

use super::{
    fields::parse_fields,
    registry::{ClaimsRegistry, NewClaim},
};

/// Claim fence block type with owned delimiters.
pub struct ClaimFence;

impl ClaimFence {
    pub const OPEN: &'static str = "```yaml";
    pub const CLOSE: &'static str = "```";

    pub fn opens(line: &str) -> bool {
        line.trim() == Self::OPEN
    }

    pub fn closes(line: &str) -> bool {
        line.trim() == Self::CLOSE
    }
}

/// Non-fatal problems found while extracting claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractWarning {
    #[error(
        "chapter {chapter}: claim block opened at line {line} is never closed, its content was dropped"
    )]
    UnterminatedFence { chapter: u32, line: usize },
}

/// Chapter text with its claim blocks replaced by reference lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub warnings: Vec<ExtractWarning>,
}

#[derive(Debug)]
enum FenceState<'a> {
    Outside,
    Inside {
        /// 1-based line number of the opening fence.
        opened_at: usize,
        body: Vec<&'a str>,
    },
}

/// Replaces every claim block in `text` with a `[^N]` reference line followed
/// by a blank line, appending one registry entry per claim.
///
/// Fenced blocks without an `id` are removed without a trace. Fences do not
/// nest: an opening fence inside a block is part of the block body. A block
/// still open at the end of the text is dropped and reported as a warning.
pub fn extract_claims(text: &str, chapter: u32, registry: &mut ClaimsRegistry) -> Extraction {
    let mut out: Vec<String> = vec![];
    let mut warnings = vec![];
    let mut state = FenceState::Outside;

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        state = match state {
            FenceState::Outside if ClaimFence::opens(line) => FenceState::Inside {
                opened_at: idx + 1,
                body: vec![],
            },
            FenceState::Outside => {
                out.push(raw.to_string());
                FenceState::Outside
            }
            FenceState::Inside { opened_at, body } if ClaimFence::closes(line) => {
                close_fence(&body, chapter, opened_at, registry, &mut out);
                FenceState::Outside
            }
            FenceState::Inside {
                opened_at,
                mut body,
            } => {
                body.push(line);
                FenceState::Inside { opened_at, body }
            }
        };
    }

    if let FenceState::Inside { opened_at, .. } = state {
        let warning = ExtractWarning::UnterminatedFence {
            chapter,
            line: opened_at,
        };
        log::warn!("{warning}");
        warnings.push(warning);
    }

    Extraction {
        text: out.join("\n"),
        warnings,
    }
}

fn close_fence(
    body: &[&str],
    chapter: u32,
    opened_at: usize,
    registry: &mut ClaimsRegistry,
    out: &mut Vec<String>,
) {
    let raw_block = body.join("\n");
    let fields = parse_fields(&raw_block);

    let Some(id) = fields.id else {
        log::debug!("chapter {chapter}: fenced block at line {opened_at} has no claim id, skipped");
        return;
    };

    let number = registry.append(NewClaim {
        id,
        text: fields.text,
        claim_type: fields.claim_type,
        confidence: fields.confidence,
        ptcs: fields.ptcs,
        chapter,
        raw_block,
    });
    log::debug!("chapter {chapter}: claim block at line {opened_at} is endnote {number}");

    out.push(NoteReference::marker(number));
    out.push(String::new());
}
