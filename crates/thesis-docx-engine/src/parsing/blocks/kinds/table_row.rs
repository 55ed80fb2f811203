/// Pipe-table row. Rows are passed through verbatim, one block per row.
pub struct TableRow;

impl TableRow {
    pub const PREFIX: &'static str = "| ";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }
}
