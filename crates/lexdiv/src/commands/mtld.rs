//! MTLD command.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::mtld;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `mtld` subcommand.
#[derive(Args, Debug)]
pub struct MtldArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// TTR threshold that closes a factor, in (0, 1).
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Compute forward, backward, and average MTLD for a file.
#[instrument(name = "cmd_mtld", skip_all, fields(file = %args.file))]
pub fn cmd_mtld(
    args: MtldArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, threshold = ?args.threshold, "executing mtld command");

    let tokens = read_tokens(&args.file, max_input_bytes, config.tokenizer)?;
    let threshold = args.threshold.unwrap_or(config.mtld_threshold);

    let result = mtld::mtld_from_tokens(&tokens, threshold)
        .with_context(|| format!("failed to compute MTLD for {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} {} (forward {}, backward {}, threshold {threshold})",
            "MTLD:".cyan(),
            fmt_stat(result.mtld_average).bold(),
            fmt_stat(result.mtld_forward),
            fmt_stat(result.mtld_backward),
        );
    }

    Ok(())
}
