//! Entropy command: n-gram Shannon entropy and perplexity.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::ngrams::{self, NgramKind};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_prose};

/// Arguments for the `entropy` subcommand.
#[derive(Args, Debug)]
pub struct EntropyArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// N-gram width.
    #[arg(short)]
    pub n: Option<usize>,

    /// Build n-grams from words or characters.
    #[arg(long, value_enum, default_value_t)]
    pub kind: NgramKind,

    /// Compute entropy per chunk of this many items and report the mean.
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

/// Compute n-gram entropy and perplexity for a file.
#[instrument(name = "cmd_entropy", skip_all, fields(file = %args.file))]
pub fn cmd_entropy(
    args: EntropyArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, n = ?args.n, kind = %args.kind, "executing entropy command");

    let prose = read_prose(&args.file, max_input_bytes)?;
    let n = args.n.unwrap_or(config.ngram_size);
    let context = || format!("failed to compute entropy for {}", args.file);

    let (entropy, perplexity, label, warning, json) = match (args.kind, args.chunk_size) {
        (NgramKind::Word, None) => {
            let tokens = config.tokenizer.tokenize(&prose);
            let r = ngrams::entropy_from_tokens(&tokens, n).with_context(context)?;
            let json = serde_json::to_string_pretty(&r)?;
            (r.entropy, r.perplexity, r.ngram_type, warning_of(&r.metadata), json)
        }
        (NgramKind::Character, None) => {
            let r = ngrams::compute_ngram_entropy(&prose, n, NgramKind::Character)
                .with_context(context)?;
            let json = serde_json::to_string_pretty(&r)?;
            (r.entropy, r.perplexity, r.ngram_type, warning_of(&r.metadata), json)
        }
        (NgramKind::Word, Some(chunk)) => {
            let tokens = config.tokenizer.tokenize(&prose);
            let r = ngrams::chunked_entropy_from_tokens(&tokens, n, chunk).with_context(context)?;
            let json = serde_json::to_string_pretty(&r)?;
            (r.entropy, r.perplexity, r.ngram_type, warning_of(&r.metadata), json)
        }
        (NgramKind::Character, Some(chunk)) => {
            let r = ngrams::compute_ngram_entropy_chunked(&prose, n, NgramKind::Character, chunk)
                .with_context(context)?;
            let json = serde_json::to_string_pretty(&r)?;
            (r.entropy, r.perplexity, r.ngram_type, warning_of(&r.metadata), json)
        }
    };

    if global_json {
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} {} bits, perplexity {} ({label})",
        "Entropy:".cyan(),
        fmt_stat(entropy).bold(),
        fmt_stat(perplexity),
    );
    if let Some(warning) = warning {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    Ok(())
}

fn warning_of(metadata: &lexdiv_core::lexical::Metadata) -> Option<String> {
    metadata
        .get("warning")
        .and_then(|w| w.as_str())
        .map(ToString::to_string)
}
