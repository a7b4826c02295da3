//! Posterior table rendering.

use std::fmt::Write;

use hd_common::Result;

use crate::inference::PosteriorTable;

/// Render the table as per-person text blocks, probabilities to four
/// decimal places, in pedigree (file) order.
pub fn render_text(table: &PosteriorTable) -> String {
    let mut out = String::new();
    for entry in table.iter() {
        let _ = writeln!(out, "{}:", entry.name);
        let _ = writeln!(out, "  Gene:");
        let _ = writeln!(out, "    2: {:.4}", entry.gene.two);
        let _ = writeln!(out, "    1: {:.4}", entry.gene.one);
        let _ = writeln!(out, "    0: {:.4}", entry.gene.zero);
        let _ = writeln!(out, "  Trait:");
        let _ = writeln!(out, "    true: {:.4}", entry.trait_.present);
        let _ = writeln!(out, "    false: {:.4}", entry.trait_.absent);
    }
    out
}

/// Render the table as pretty-printed JSON.
pub fn render_json(table: &PosteriorTable) -> Result<String> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}
