//! Diversity command: MATTR, MSTTR, HD-D, and voc-D in one pass.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::{
    HddResult, MattrResult, MsttrResult, VocdParams, VocdResult, hdd, mattr, msttr, vocd,
};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `diversity` subcommand.
#[derive(Args, Debug)]
pub struct DiversityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// MATTR window size.
    #[arg(long)]
    pub window: Option<usize>,

    /// MSTTR segment size.
    #[arg(long)]
    pub segment: Option<usize>,

    /// HD-D sample size.
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// voc-D random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// voc-D samples drawn per sample size.
    #[arg(long)]
    pub samples: Option<usize>,
}

#[derive(Serialize)]
struct DiversityReport {
    mattr: MattrResult,
    msttr: MsttrResult,
    hdd: HddResult,
    vocd: VocdResult,
}

/// Compute the length-robust diversity measures for a file.
#[instrument(name = "cmd_diversity", skip_all, fields(file = %args.file))]
pub fn cmd_diversity(
    args: DiversityArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, ?args, "executing diversity command");

    let tokens = read_tokens(&args.file, max_input_bytes, config.tokenizer)?;
    let vocd_params = VocdParams {
        random_seed: args.seed.unwrap_or(config.vocd.random_seed),
        num_samples: args.samples.unwrap_or(config.vocd.num_samples),
        ..config.vocd
    };

    let report = DiversityReport {
        mattr: mattr::mattr_from_tokens(&tokens, args.window.unwrap_or(config.mattr_window))
            .context("failed to compute MATTR")?,
        msttr: msttr::msttr_from_tokens(&tokens, args.segment.unwrap_or(config.msttr_segment))
            .context("failed to compute MSTTR")?,
        hdd: hdd::hdd_from_tokens(&tokens, args.sample_size.unwrap_or(config.hdd_sample_size))
            .context("failed to compute HD-D")?,
        vocd: vocd::vocd_from_tokens(&tokens, &vocd_params).context("failed to compute voc-D")?,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    let m = &report.mattr;
    println!(
        "  {} {} (window {}, {} windows, range {}..{})",
        "MATTR:".cyan(),
        fmt_stat(m.mattr_score),
        m.window_size,
        m.window_count,
        fmt_stat(m.min_ttr),
        fmt_stat(m.max_ttr),
    );
    let s = &report.msttr;
    println!(
        "  {} {} (segment {}, {} segments, std {})",
        "MSTTR:".cyan(),
        fmt_stat(s.msttr_score),
        s.segment_size,
        s.segment_count,
        fmt_stat(s.ttr_std_dev),
    );
    let h = &report.hdd;
    println!(
        "  {} {} (sample {}, expected types {})",
        "HD-D:".cyan(),
        fmt_stat(h.hdd_score),
        h.sample_size,
        fmt_stat(h.expected_types),
    );
    let v = &report.vocd;
    if let Some(warning) = v.metadata.get("warning").and_then(|w| w.as_str()) {
        println!("  {} {}", "voc-D:".cyan(), warning.yellow());
    } else {
        println!(
            "  {} {} (R² {}, seed {})",
            "voc-D:".cyan(),
            fmt_stat(v.d_parameter),
            fmt_stat(v.curve_fit_r_squared),
            vocd_params.random_seed,
        );
    }

    Ok(())
}
