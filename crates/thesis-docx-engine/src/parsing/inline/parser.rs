use super::{cursor::Cursor, kinds::Emphasis, types::Run};

/// Splits a line into styled [`Run`]s.
///
/// Plain text accumulates until a delimiter is found. `**` opens a bold region
/// that runs to the next `**`; a lone `*` opens an italic region that runs to
/// the next `*`. An unclosed region runs to the end of the line.
///
/// # Returns
/// Runs in line order. Empty runs are never emitted, so a line made only of
/// delimiters yields an empty vector.
pub fn format_inline(line: &str) -> Vec<Run> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<Run>, text: &str) {
        if !text.is_empty() {
            out.push(Run::plain(text));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Emphasis::STRONG) {
            flush_text(&mut out, &line[text_start..cur.i]);
            if let Some(run) = scan_strong(&mut cur) {
                out.push(run);
            }
            text_start = cur.i;
            continue;
        }
        if cur.peek() == Some(Emphasis::EM) {
            flush_text(&mut out, &line[text_start..cur.i]);
            if let Some(run) = scan_em(&mut cur) {
                out.push(run);
            }
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &line[text_start..cur.i]);
    out
}

/// Consumes a bold region starting at `**`, leaving the cursor after the
/// closing `**` or at end of line.
fn scan_strong(cur: &mut Cursor<'_>) -> Option<Run> {
    cur.bump_n(Emphasis::STRONG.len());
    let start = cur.i;
    while !cur.eof() && !cur.starts_with(Emphasis::STRONG) {
        cur.bump();
    }
    let inner = cur.since(start);
    cur.bump_n(Emphasis::STRONG.len());
    (!inner.is_empty()).then(|| Run::bold(inner))
}

/// Consumes an italic region starting at `*`, leaving the cursor after the
/// closing `*` or at end of line.
fn scan_em(cur: &mut Cursor<'_>) -> Option<Run> {
    cur.bump();
    let start = cur.i;
    while !cur.eof() && cur.peek() != Some(Emphasis::EM) {
        cur.bump();
    }
    let inner = cur.since(start);
    cur.bump();
    (!inner.is_empty()).then(|| Run::italic(inner))
}
