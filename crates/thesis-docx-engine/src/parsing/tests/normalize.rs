use crate::parsing::{Block, Run};

/// Compact one-line-per-block rendering of a block sequence.
///
/// Kind tags: `H1`..`H4`, `EM` (emphasis paragraph), `P` (styled paragraph),
/// `UL` / `OL` (list items), `RAW`, `REF`, `DETAIL`, `TITLE`, `SUBTITLE`, `CENTER`,
/// `BREAK`. Styled runs are shown with their markdown delimiters restored.
pub fn outline(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| match b {
            Block::Title { text } => format!("TITLE {text}"),
            Block::Subtitle { text } => format!("SUBTITLE {text}"),
            Block::Centered { text } => format!("CENTER {text}"),
            Block::Heading { level, text } => format!("H{} {text}", level.depth()),
            Block::EmphasisParagraph { text } => format!("EM {text}"),
            Block::StyledParagraph { runs } => format!("P {}", runs_markup(runs)),
            Block::ListItem { runs, ordered } => {
                let tag = if *ordered { "OL" } else { "UL" };
                format!("{tag} {}", runs_markup(runs))
            }
            Block::RawLine { text } => format!("RAW {text}"),
            Block::NoteReference { number } => format!("REF {number}"),
            Block::Detail { runs, indent } => format!("DETAIL({indent:?}) {}", runs_markup(runs)),
            Block::Break => "BREAK".to_string(),
        })
        .collect()
}

fn runs_markup(runs: &[Run]) -> String {
    runs.iter()
        .map(|r| {
            let mut s = r.text.clone();
            if r.italic {
                s = format!("*{s}*");
            }
            if r.bold {
                s = format!("**{s}**");
            }
            if r.superscript {
                s = format!("^{s}");
            }
            s
        })
        .collect()
}
