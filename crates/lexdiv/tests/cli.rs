//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const PROSE: &str = "The quick brown fox jumps over the lazy dog. The dog sleeps \
                     while the fox runs through the quiet forest near the river.";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Run a subcommand with `--json` and parse its stdout.
fn run_json(args: &[&str]) -> Value {
    let output = cmd().args(args).arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// A long text with a Zipf-like vocabulary.
fn long_text(tokens: usize) -> String {
    let mut words = Vec::with_capacity(tokens);
    let mut i = 0usize;
    while words.len() < tokens {
        for rank in 1..=80 {
            if i % rank == 0 {
                words.push(format!("w{rank}"));
            }
        }
        i += 1;
    }
    words.truncate(tokens);
    words.join(" ")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("mtld"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEXDIV_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .args(["info", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexdiv"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let json = run_json(&["info"]);
    assert_eq!(json["name"], "lexdiv");
    assert!(json["config"].is_object());
}

// =============================================================================
// Engine Commands
// =============================================================================

#[test]
fn ttr_reports_counts() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["ttr", file.to_str().unwrap()]);

    assert_eq!(json["total_words"], 23);
    assert_eq!(json["metadata"]["sttr_available"], false);
    assert_eq!(json["metadata"]["text_id"], file.to_str().unwrap());
}

#[test]
fn ttr_text_output_mentions_sttr_requirement() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    cmd()
        .args(["ttr", file.to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TTR:"))
        .stdout(predicate::str::contains("needs 2000 tokens"));
}

#[test]
fn mtld_threshold_flag() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", "a b c a");
    let json = run_json(&["mtld", file.to_str().unwrap(), "--threshold", "0.5"]);
    assert_eq!(json["mtld_average"], 8.0);
}

#[test]
fn mtld_rejects_bad_threshold() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    cmd()
        .args(["mtld", file.to_str().unwrap(), "--threshold", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be in range (0, 1)"));
}

#[test]
fn yule_on_empty_file_prints_nan() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "empty.txt", "");
    cmd()
        .args(["yule", file.to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yule's K: NaN"));
}

#[test]
fn yule_json_spells_nan_on_empty_input() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "empty.txt", "   \n");
    let json = run_json(&["yule", file.to_str().unwrap()]);
    assert_eq!(json["yule_k"], "NaN");
    assert_eq!(json["yule_i"], "NaN");
    assert_eq!(json["metadata"]["token_count"], 0);
}

#[test]
fn yule_json_stays_numeric_for_finite_values() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["yule", file.to_str().unwrap()]);
    assert!(json["yule_k"].as_f64().unwrap() > 0.0);
}

#[test]
fn hapax_without_repetition_reports_infinite_honore() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", "alpha beta gamma");
    cmd()
        .args(["hapax", file.to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hapax legomena: 3"))
        .stdout(predicate::str::contains("Honoré's R: inf"));
}

#[test]
fn hapax_json_distinguishes_infinite_from_undefined() {
    let tmp = TempDir::new().unwrap();
    let unique = write(tmp.path(), "unique.txt", "alpha beta gamma");
    let empty = write(tmp.path(), "empty.txt", "");

    let json = run_json(&["hapax", unique.to_str().unwrap()]);
    assert_eq!(json["honore_r"], "inf");
    assert_eq!(json["hapax_count"], 3);

    let json = run_json(&["hapax", empty.to_str().unwrap()]);
    assert_eq!(json["honore_r"], "NaN");
    assert_eq!(json["hapax_ratio"], "NaN");
    assert_eq!(json["hapax_count"], 0);
}

#[test]
fn hapax_with_word_lists() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", "cat dog zorblax dog");
    let general = write(tmp.path(), "general.txt", "# general\ncat\ndog\n");
    let senses = write(tmp.path(), "senses.txt", "cat\n");

    let json = run_json(&[
        "hapax",
        file.to_str().unwrap(),
        "--general-corpus",
        general.to_str().unwrap(),
        "--sense-inventory",
        senses.to_str().unwrap(),
    ]);

    let lex = &json["lexicon_analysis"];
    assert_eq!(lex["common_words"], serde_json::json!(["cat"]));
    assert_eq!(lex["neologisms"], serde_json::json!(["zorblax"]));
    assert_eq!(lex["neologism_ratio"], 0.5);
}

#[test]
fn hapax_word_lists_must_come_together() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let general = write(tmp.path(), "general.txt", "cat\n");
    cmd()
        .args([
            "hapax",
            file.to_str().unwrap(),
            "--general-corpus",
            general.to_str().unwrap(),
        ])
        .assert()
        .failure();
}

#[test]
fn diversity_reports_all_measures() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", &long_text(400));
    let json = run_json(&["diversity", file.to_str().unwrap(), "--samples", "20"]);

    assert!(json["mattr"]["mattr_score"].as_f64().unwrap() > 0.0);
    assert_eq!(json["msttr"]["segment_count"], 4);
    assert!(json["hdd"]["hdd_score"].as_f64().unwrap() <= 1.0);
    assert!(json["vocd"]["d_parameter"].as_f64().unwrap() > 0.0);
}

#[test]
fn diversity_json_spells_nan_on_empty_input() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "empty.txt", "");
    let json = run_json(&["diversity", file.to_str().unwrap()]);

    assert_eq!(json["mattr"]["mattr_score"], "NaN");
    assert_eq!(json["mattr"]["window_count"], 0);
    assert_eq!(json["msttr"]["msttr_score"], "NaN");
    assert_eq!(json["hdd"]["hdd_score"], "NaN");
    assert_eq!(json["vocd"]["d_parameter"], "NaN");
    assert_eq!(json["vocd"]["curve_fit_r_squared"], "NaN");
}

#[test]
fn diversity_seed_is_reproducible() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", &long_text(300));
    let args = ["diversity", file.to_str().unwrap(), "--seed", "7", "--samples", "10"];
    assert_eq!(run_json(&args)["vocd"], run_json(&args)["vocd"]);
}

#[test]
fn diversity_short_text_warns() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["diversity", file.to_str().unwrap()]);
    assert_eq!(json["vocd"]["d_parameter"], "NaN");
    assert!(json["vocd"]["metadata"]["warning"].is_string());
}

#[test]
fn entropy_identity_holds() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["entropy", file.to_str().unwrap(), "-n", "2"]);

    let h = json["entropy"].as_f64().unwrap();
    let pp = json["perplexity"].as_f64().unwrap();
    assert!((pp - h.exp2()).abs() < 1e-9);
    assert_eq!(json["ngram_type"], "word_2gram");
}

#[test]
fn entropy_character_kind() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", "aaaa");
    let json = run_json(&["entropy", file.to_str().unwrap(), "--kind", "character", "-n", "1"]);
    assert_eq!(json["entropy"], 0.0);
    assert_eq!(json["ngram_type"], "character_1gram");
}

#[test]
fn entropy_short_text_warns() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", "one");
    cmd()
        .args(["entropy", file.to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text too short for n-gram analysis"));
}

#[test]
fn entropy_chunked() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", &long_text(100));
    let json = run_json(&["entropy", file.to_str().unwrap(), "--chunk-size", "25"]);
    assert_eq!(json["chunk_count"], 4);
    assert_eq!(json["entropy_dist"]["values"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Analyze & Aggregate
// =============================================================================

#[test]
fn analyze_runs_all_checks() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["analyze", file.to_str().unwrap()]);

    assert_eq!(json["token_count"], 23);
    for check in ["ttr", "mtld", "yule", "hapax", "mattr", "msttr", "hdd", "vocd", "entropy"] {
        assert!(json.get(check).is_some(), "missing {check}");
    }
}

#[test]
fn analyze_selected_checks_only() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["analyze", file.to_str().unwrap(), "--checks", "yule,mtld"]);

    assert!(json.get("yule").is_some());
    assert!(json.get("mtld").is_some());
    assert!(json.get("ttr").is_none());
}

#[test]
fn analyze_exclude_checks() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    let json = run_json(&["analyze", file.to_str().unwrap(), "--exclude", "vocd,entropy"]);

    assert!(json.get("vocd").is_none());
    assert!(json.get("entropy").is_none());
    assert!(json.get("ttr").is_some());
}

#[test]
fn analyze_unknown_check_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    cmd()
        .args(["analyze", file.to_str().unwrap(), "--checks", "sparkle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check: sparkle"));
}

#[test]
fn analyze_strips_markdown() {
    let tmp = TempDir::new().unwrap();
    let file = write(
        tmp.path(),
        "doc.md",
        "---\ntitle: x\n---\n# Heading\n\nplain words here\n\n```\ncode code\n```\n",
    );
    let json = run_json(&["analyze", file.to_str().unwrap(), "--checks", "ttr"]);
    assert_eq!(json["token_count"], 3);
}

#[test]
fn aggregate_combines_files() {
    let tmp = TempDir::new().unwrap();
    let a = write(tmp.path(), "a.txt", "a b c d");
    let b = write(tmp.path(), "b.txt", "a a b b");
    let json = run_json(&[
        "aggregate",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--group-id",
        "pair",
    ]);

    let agg = &json["aggregate"];
    assert_eq!(agg["group_id"], "pair");
    assert_eq!(agg["text_count"], 2);
    assert_eq!(agg["total_words"], 8);
    assert_eq!(agg["ttr_mean"], 0.75);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn aggregate_requires_files() {
    cmd().arg("aggregate").assert().failure();
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_file_fails() {
    cmd()
        .args(["ttr", "/nonexistent/lexdiv-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn zero_window_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "doc.txt", PROSE);
    cmd()
        .args(["diversity", file.to_str().unwrap(), "--window", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}
