//! TTR command: type-token ratio family.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::ttr;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `ttr` subcommand.
#[derive(Args, Debug)]
pub struct TtrArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Tokens per chunk for STTR and the per-chunk distributions.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Identifier recorded in the result metadata.
    #[arg(long)]
    pub text_id: Option<String>,
}

/// Compute TTR, root TTR, log TTR, and STTR for a file.
#[instrument(name = "cmd_ttr", skip_all, fields(file = %args.file))]
pub fn cmd_ttr(
    args: TtrArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, chunk_size = ?args.chunk_size, "executing ttr command");

    let tokens = read_tokens(&args.file, max_input_bytes, config.tokenizer)?;
    let chunk_size = args.chunk_size.unwrap_or(config.ttr_chunk_size);
    let text_id = args.text_id.as_deref().unwrap_or(args.file.as_str());

    let result = ttr::ttr_from_tokens(&tokens, Some(text_id), chunk_size)
        .with_context(|| format!("failed to compute TTR for {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "  {} {} tokens, {} types",
        "Size:".cyan(),
        result.total_words,
        result.unique_words,
    );
    println!("  {} {}", "TTR:".cyan(), fmt_stat(result.ttr));
    println!("  {} {}", "Root TTR:".cyan(), fmt_stat(result.root_ttr));
    println!("  {} {}", "Log TTR:".cyan(), fmt_stat(result.log_ttr));

    if result.sttr_dist.is_empty() {
        println!(
            "  {} {}",
            "STTR:".cyan(),
            format!("n/a (needs {} tokens)", ttr::STTR_MIN_WORDS).dimmed()
        );
    } else {
        println!(
            "  {} {} (chunk size {})",
            "STTR:".cyan(),
            fmt_stat(result.sttr),
            result.chunk_size,
        );
    }
    if !result.delta_std_dist.is_empty() {
        println!("  {} {}", "Delta std:".cyan(), fmt_stat(result.delta_std));
    }

    Ok(())
}
