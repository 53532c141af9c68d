//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use lexdiv_core::markdown;
use lexdiv_core::text::Tokenizer;

pub mod aggregate;
pub mod analyze;
pub mod diversity;
pub mod entropy;
pub mod hapax;
pub mod info;
pub mod mtld;
pub mod ttr;
pub mod yule;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Whether `path` should be reduced to prose before analysis.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

/// Read `path` and return its prose: markdown files are stripped of code,
/// headings, and frontmatter; everything else is returned as is.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    Ok(if is_markdown(path) {
        markdown::strip_to_prose(&content)
    } else {
        content
    })
}

/// Read `path` as prose and tokenize it.
pub fn read_tokens(
    path: &Utf8Path,
    max_bytes: Option<usize>,
    tokenizer: Tokenizer,
) -> anyhow::Result<Vec<String>> {
    Ok(tokenizer.tokenize(&read_prose(path, max_bytes)?))
}

/// Format a statistic for text output; non-finite values print as `NaN` / `inf`.
pub fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value:.4}")
    }
}
