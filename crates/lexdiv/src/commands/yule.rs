//! Yule command: Yule's K and I.

use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::yule;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `yule` subcommand.
#[derive(Args, Debug)]
pub struct YuleArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Compute Yule's K (repetitiveness) and I (richness) for a file.
#[instrument(name = "cmd_yule", skip_all, fields(file = %args.file))]
pub fn cmd_yule(
    args: YuleArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing yule command");

    let tokens = read_tokens(&args.file, max_input_bytes, config.tokenizer)?;
    let result = yule::yule_from_tokens(&tokens);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} {}", "Yule's K:".cyan(), fmt_stat(result.yule_k));
        println!("{} {}", "Yule's I:".cyan(), fmt_stat(result.yule_i));
    }

    Ok(())
}
