//! Info command implementation

use clap::Args;
use lexdiv_core::config::{Config, ConfigSources};
use lexdiv_core::lexical::VocdParams;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    tokenizer: String,
    /// `None` when the input limit is disabled.
    max_input_bytes: Option<usize>,
    ttr_chunk_size: usize,
    mtld_threshold: f64,
    mattr_window: usize,
    msttr_segment: usize,
    hdd_sample_size: usize,
    vocd: VocdParams,
    ngram_size: usize,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            tokenizer: config.tokenizer.to_string(),
            max_input_bytes: config.input_limit(),
            ttr_chunk_size: config.ttr_chunk_size,
            mtld_threshold: config.mtld_threshold,
            mattr_window: config.mattr_window,
            msttr_segment: config.msttr_segment,
            hdd_sample_size: config.hdd_sample_size,
            vocd: config.vocd,
            ngram_size: config.ngram_size,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: info,
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Tokenizer".dimmed(), cfg.tokenizer);
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Engine Defaults".bold().underline());
    println!("{}: {}", "TTR chunk size".dimmed(), cfg.ttr_chunk_size);
    println!("{}: {}", "MTLD threshold".dimmed(), cfg.mtld_threshold);
    println!("{}: {}", "MATTR window".dimmed(), cfg.mattr_window);
    println!("{}: {}", "MSTTR segment".dimmed(), cfg.msttr_segment);
    println!("{}: {}", "HD-D sample size".dimmed(), cfg.hdd_sample_size);
    println!(
        "{}: sizes {}..={}, {} samples, seed {}",
        "voc-D".dimmed(),
        cfg.vocd.sample_size,
        cfg.vocd.sample_size + 15,
        cfg.vocd.num_samples,
        cfg.vocd.random_seed,
    );
    println!("{}: {}", "N-gram size".dimmed(), cfg.ngram_size);

    Ok(())
}
