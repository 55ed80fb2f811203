use serde::Serialize;

/// A claim found in a chapter, with its endnote number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimEntry {
    pub number: u32,
    pub id: String,
    pub text: Option<String>,
    pub claim_type: Option<String>,
    pub confidence: Option<i64>,
    #[serde(rename = "pTCS")]
    pub ptcs: Option<i64>,
    /// 1-based index of the chapter the claim came from.
    pub chapter: u32,
    /// The fenced block body, lines joined with `\n`.
    pub raw_block: String,
}

/// A claim waiting for its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub id: String,
    pub text: Option<String>,
    pub claim_type: Option<String>,
    pub confidence: Option<i64>,
    pub ptcs: Option<i64>,
    pub chapter: u32,
    pub raw_block: String,
}

/// Aggregate statistics over a non-empty registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Rounded mean over the entries that have a confidence value.
    pub mean_confidence: Option<i64>,
    /// Rounded mean over the entries that have a pTCS value.
    #[serde(rename = "mean_pTCS")]
    pub mean_ptcs: Option<i64>,
}

/// Claims collected during one export, numbered in the order they were found.
///
/// One registry belongs to one assembled document; numbering restarts with
/// every new registry.
#[derive(Debug, Clone, Default)]
pub struct ClaimsRegistry {
    entries: Vec<ClaimEntry>,
}

impl ClaimsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number the next appended claim will receive.
    pub fn next_number(&self) -> u32 {
        self.entries.len() as u32 + 1
    }

    /// Records a claim and returns its number.
    pub fn append(&mut self, claim: NewClaim) -> u32 {
        let number = self.next_number();
        self.entries.push(ClaimEntry {
            number,
            id: claim.id,
            text: claim.text,
            claim_type: claim.claim_type,
            confidence: claim.confidence,
            ptcs: claim.ptcs,
            chapter: claim.chapter,
            raw_block: claim.raw_block,
        });
        number
    }

    /// All entries, ordered by number.
    pub fn all(&self) -> &[ClaimEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count and mean scores, or `None` for an empty registry.
    pub fn summary(&self) -> Option<Summary> {
        if self.entries.is_empty() {
            return None;
        }
        Some(Summary {
            count: self.entries.len(),
            mean_confidence: rounded_mean(self.entries.iter().filter_map(|e| e.confidence)),
            mean_ptcs: rounded_mean(self.entries.iter().filter_map(|e| e.ptcs)),
        })
    }
}

/// Arithmetic mean rounded half up. Summed in `i128` so extreme scores
/// cannot overflow.
fn rounded_mean(values: impl Iterator<Item = i64>) -> Option<i64> {
    let (sum, count) = values.fold((0i128, 0i128), |(sum, count), v| {
        (sum + i128::from(v), count + 1)
    });
    if count == 0 {
        return None;
    }
    // floor(sum / count + 1/2) without leaving integers
    i64::try_from((2 * sum + count).div_euclid(2 * count)).ok()
}
