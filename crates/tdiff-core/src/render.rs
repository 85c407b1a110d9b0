//! Plain-text rendering of an edit script.
//!
//! Each operation becomes one row prefixed with its marker (`+`, `-` or a
//! blank). Rows keep the script's order.

use crate::script::{EditScript, OpKind};

/// One rendered row, still tagged with the kind of operation it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    pub kind: OpKind,
    pub text: String,
}

/// Render each operation as a row, optionally with line-number gutters.
///
/// Without numbers a row reads `"{marker} {line}"`. With numbers it is
/// prefixed by old and new gutters, sized for the largest line number on
/// either side, blank on the side the operation does not touch.
pub fn render_rows(script: &EditScript, line_numbers: bool) -> Vec<RenderedRow> {
    if !line_numbers {
        return script
            .iter()
            .map(|op| RenderedRow {
                kind: op.kind,
                text: format!("{} {}", op.kind.marker(), op.line),
            })
            .collect();
    }

    let stats = script.stats();
    let width = digits(stats.old_len().max(stats.new_len()));
    script
        .numbered()
        .map(|row| RenderedRow {
            kind: row.op.kind,
            text: format!(
                "{} {} {} {}",
                gutter(row.old_no, width),
                gutter(row.new_no, width),
                row.op.kind.marker(),
                row.op.line
            ),
        })
        .collect()
}

/// Render one `"{marker} {line}"` row per operation, newline-terminated.
pub fn render_plain(script: &EditScript) -> String {
    join(render_rows(script, false))
}

/// Like [`render_plain`], with old and new line-number gutters.
pub fn render_numbered(script: &EditScript) -> String {
    join(render_rows(script, true))
}

fn join(rows: Vec<RenderedRow>) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.text);
        out.push('\n');
    }
    out
}

fn gutter(no: Option<usize>, width: usize) -> String {
    match no {
        Some(n) => format!("{n:>width$}"),
        None => " ".repeat(width),
    }
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
