//! Aggregate command: TTR statistics across a group of files.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use lexdiv_core::config::Config;
use lexdiv_core::lexical::{TtrAggregate, TtrAggregator, TtrResult, ttr};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `aggregate` subcommand.
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Files to analyze.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Label for the group.
    #[arg(long, default_value = "default")]
    pub group_id: String,

    /// Tokens per TTR chunk.
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

#[derive(Serialize)]
struct AggregateReport {
    results: Vec<TtrResult>,
    aggregate: TtrAggregate,
}

/// Compute TTR for each file, then summarize the group.
#[instrument(name = "cmd_aggregate", skip_all, fields(files = args.files.len()))]
pub fn cmd_aggregate(
    args: AggregateArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = args.files.len(), group_id = %args.group_id, "executing aggregate command");

    let chunk_size = args.chunk_size.unwrap_or(config.ttr_chunk_size);

    let progress = ProgressBar::new(args.files.len() as u64);
    if global_json {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let tokens = read_tokens(file, max_input_bytes, config.tokenizer)?;
        let result = ttr::ttr_from_tokens(&tokens, Some(file.as_str()), chunk_size)
            .with_context(|| format!("failed to compute TTR for {file}"))?;
        results.push(result);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let aggregate = TtrAggregator::new()
        .aggregate(&results, &args.group_id)
        .context("failed to aggregate TTR results")?;

    if global_json {
        let report = AggregateReport { results, aggregate };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (file, result) in args.files.iter().zip(&results) {
        println!(
            "  {:<40} {:>8} tokens  TTR {}",
            file.as_str(),
            result.total_words,
            fmt_stat(result.ttr),
        );
    }
    println!();
    println!(
        "{} {} ({} texts, {} tokens)",
        "Group:".bold(),
        aggregate.group_id,
        aggregate.text_count,
        aggregate.total_words,
    );
    println!(
        "  {} mean {}, std {}, range {}..{}",
        "TTR:".cyan(),
        fmt_stat(aggregate.ttr_mean),
        fmt_stat(aggregate.ttr_std),
        fmt_stat(aggregate.ttr_min),
        fmt_stat(aggregate.ttr_max),
    );
    println!("  {} {}", "Root TTR mean:".cyan(), fmt_stat(aggregate.root_ttr_mean));
    println!("  {} {}", "Log TTR mean:".cyan(), fmt_stat(aggregate.log_ttr_mean));

    Ok(())
}
