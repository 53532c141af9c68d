//! Analyze command: every lexical measure over one file.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::{self, ALL_CHECKS, AnalysisOptions};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, is_markdown, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Checks to skip (comma-separated).
    #[arg(long, value_delimiter = ',', conflicts_with = "checks")]
    pub exclude: Option<Vec<String>>,
}

/// Resolve `--checks` / `--exclude` into the list handed to the runner.
fn select_checks(
    checks: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> anyhow::Result<Option<Vec<String>>> {
    let Some(exclude) = exclude else {
        return Ok(checks);
    };
    if let Some(unknown) = exclude.iter().find(|c| !ALL_CHECKS.contains(&c.as_str())) {
        bail!("unknown check: {unknown}. Use: {}", ALL_CHECKS.join(", "));
    }
    Ok(Some(
        ALL_CHECKS
            .iter()
            .filter(|c| !exclude.iter().any(|e| e == *c))
            .map(ToString::to_string)
            .collect(),
    ))
}

/// Run the full lexical analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, exclude = ?args.exclude, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let options = AnalysisOptions {
        strip_md: is_markdown(&args.file),
        checks: select_checks(args.checks, args.exclude)?,
        ..AnalysisOptions::from_config(config)
    };

    let report = lexical::run_full_analysis(&content, &options)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output, one section per check
    println!(
        "{} ({} tokens, {} types)",
        args.file.bold(),
        report.token_count,
        report.vocabulary_size,
    );

    if let Some(ref t) = report.ttr {
        println!(
            "\n  {} {}, root {}, log {}",
            "TTR:".cyan(),
            fmt_stat(t.ttr),
            fmt_stat(t.root_ttr),
            fmt_stat(t.log_ttr),
        );
    }

    if let Some(ref m) = report.mtld {
        println!(
            "\n  {} {} (forward {}, backward {})",
            "MTLD:".cyan(),
            fmt_stat(m.mtld_average),
            fmt_stat(m.mtld_forward),
            fmt_stat(m.mtld_backward),
        );
    }

    if let Some(ref y) = report.yule {
        println!(
            "\n  {} K {}, I {}",
            "Yule:".cyan(),
            fmt_stat(y.yule_k),
            fmt_stat(y.yule_i),
        );
    }

    if let Some(ref h) = report.hapax {
        println!(
            "\n  {} {} hapax ({}), {} dis ({}), Sichel's S {}, Honoré's R {}",
            "Hapax:".cyan(),
            h.hapax_count,
            fmt_stat(h.hapax_ratio),
            h.dis_hapax_count,
            fmt_stat(h.dis_hapax_ratio),
            fmt_stat(h.sichel_s),
            fmt_stat(h.honore_r),
        );
    }

    if let Some(ref m) = report.mattr {
        println!(
            "\n  {} {} (window {})",
            "MATTR:".cyan(),
            fmt_stat(m.mattr_score),
            m.window_size,
        );
    }

    if let Some(ref s) = report.msttr {
        println!(
            "\n  {} {} (segment {})",
            "MSTTR:".cyan(),
            fmt_stat(s.msttr_score),
            s.segment_size,
        );
    }

    if let Some(ref h) = report.hdd {
        println!(
            "\n  {} {} (sample {})",
            "HD-D:".cyan(),
            fmt_stat(h.hdd_score),
            h.sample_size,
        );
    }

    if let Some(ref v) = report.vocd {
        println!(
            "\n  {} {} (R² {})",
            "voc-D:".cyan(),
            fmt_stat(v.d_parameter),
            fmt_stat(v.curve_fit_r_squared),
        );
    }

    if let Some(ref e) = report.entropy {
        println!(
            "\n  {} {} bits, perplexity {} ({})",
            "Entropy:".cyan(),
            fmt_stat(e.entropy),
            fmt_stat(e.perplexity),
            e.ngram_type,
        );
    }

    Ok(())
}
