use std::io::{self, Write};

use relevo_rerank::{RankedResult, preview};

/// Characters of each model answer shown before reranking.
pub const RESPONSE_PREVIEW_CHARS: usize = 200;

const SEPARATOR: &str = "--------------------------------------------";

pub fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n=== {title} ===\n")
}

pub fn query(out: &mut impl Write, query: &str) -> io::Result<()> {
    writeln!(out, "Query: {query}\n")
}

pub fn ranked_results(out: &mut impl Write, results: &[RankedResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{result}\n")?;
    }
    Ok(())
}

pub fn model_response(out: &mut impl Write, model: &str, text: &str) -> io::Result<()> {
    let (shown, truncated) = preview(text, RESPONSE_PREVIEW_CHARS);
    let ellipsis = if truncated { "..." } else { "" };
    writeln!(out, "Model: {model}\nResponse: {shown}{ellipsis}\n{SEPARATOR}")
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🐬")
}
