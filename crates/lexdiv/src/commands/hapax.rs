//! Hapax command: hapax/dis legomena, Sichel's S, Honoré's R, and optional
//! lexicon categorization of the hapaxes.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexdiv_core::config::Config;
use lexdiv_core::lexical::{HapaxResult, WordList, hapax};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{fmt_stat, read_tokens};

/// Arguments for the `hapax` subcommand.
#[derive(Args, Debug)]
pub struct HapaxArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Newline-delimited general-corpus word list.
    #[arg(long, requires = "sense_inventory", value_name = "FILE")]
    pub general_corpus: Option<Utf8PathBuf>,

    /// Newline-delimited sense-inventory word list.
    #[arg(long, requires = "general_corpus", value_name = "FILE")]
    pub sense_inventory: Option<Utf8PathBuf>,
}

/// Compute hapax statistics, optionally classifying hapaxes against two
/// word lists.
#[instrument(name = "cmd_hapax", skip_all, fields(file = %args.file))]
pub fn cmd_hapax(
    args: HapaxArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        lexicons = args.general_corpus.is_some(),
        "executing hapax command"
    );

    let tokens = read_tokens(&args.file, max_input_bytes, config.tokenizer)?;

    let (Some(general_path), Some(senses_path)) = (&args.general_corpus, &args.sense_inventory)
    else {
        let result = hapax::hapax_from_tokens(&tokens);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_hapax(&result);
        }
        return Ok(());
    };

    let general = WordList::from_file(general_path)
        .with_context(|| format!("failed to read word list {general_path}"))?;
    let senses = WordList::from_file(senses_path)
        .with_context(|| format!("failed to read word list {senses_path}"))?;
    debug!(general = general.len(), senses = senses.len(), "word lists loaded");

    let result = hapax::hapax_with_lexicon_from_tokens(&tokens, &general, &senses);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_hapax(&result.hapax);
    let lex = &result.lexicon_analysis;
    println!();
    println!("{}", "Lexicon categories".bold().underline());
    print_category("Neologisms", lex.neologism_ratio, &lex.neologisms);
    print_category("Rare", lex.rare_word_ratio, &lex.rare_words);
    print_category("Common", lex.common_word_ratio, &lex.common_words);

    Ok(())
}

fn print_hapax(result: &HapaxResult) {
    println!(
        "{} {} ({})",
        "Hapax legomena:".cyan(),
        result.hapax_count,
        fmt_stat(result.hapax_ratio),
    );
    println!(
        "{} {} ({})",
        "Dis legomena:".cyan(),
        result.dis_hapax_count,
        fmt_stat(result.dis_hapax_ratio),
    );
    println!("{} {}", "Sichel's S:".cyan(), fmt_stat(result.sichel_s));
    println!("{} {}", "Honoré's R:".cyan(), fmt_stat(result.honore_r));
}

/// Print a category ratio with up to ten example words.
fn print_category(label: &str, ratio: f64, words: &[String]) {
    let shown: Vec<&str> = words.iter().take(10).map(String::as_str).collect();
    let more = words.len().saturating_sub(shown.len());
    let suffix = if more > 0 {
        format!(" (+{more} more)")
    } else {
        String::new()
    };
    println!(
        "  {} {} [{}]{}",
        format!("{label}:").dimmed(),
        fmt_stat(ratio),
        shown.join(", "),
        suffix,
    );
}
