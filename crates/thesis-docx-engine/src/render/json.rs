use serde::Serialize;

use crate::models::VariantProfile;
use crate::parsing::Block;

use super::RenderError;

#[derive(Serialize)]
struct JsonDocument<'a> {
    language: &'a str,
    font: &'a str,
    blocks: &'a [Block],
}

/// Pretty-printed JSON of the block sequence with the variant's language and
/// font.
pub fn render(blocks: &[Block], profile: &VariantProfile) -> Result<Vec<u8>, RenderError> {
    let doc = JsonDocument {
        language: &profile.language,
        font: &profile.font,
        blocks,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
