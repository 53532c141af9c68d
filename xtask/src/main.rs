//! Development tasks for lexdiv.
//!
//! ```text
//! cargo xtask man           # man pages into target/man/
//! cargo xtask completions   # shell completions into target/completions/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for lexdiv", long_about = None)]
struct XtaskCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate man pages for lexdiv and each subcommand
    Man(OutArgs),
    /// Generate shell completion scripts
    Completions(OutArgs),
}

#[derive(Args, Debug)]
struct OutArgs {
    /// Output directory (defaults to a directory under target/)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    match XtaskCli::parse().command {
        Commands::Man(args) => generate_man(&out_dir(args.out_dir, "man")),
        Commands::Completions(args) => generate_completions(&out_dir(args.out_dir, "completions")),
    }
}

fn out_dir(explicit: Option<PathBuf>, name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("target")
            .join(name)
    })
}

fn generate_man(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let cmd = lexdiv::command();
    let name = cmd.get_name().to_string();

    write_man_page(dir, &name, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        let sub = sub.clone().name(page.clone());
        write_man_page(dir, &page, sub)?;
    }

    println!("man pages written to {}", dir.display());
    Ok(())
}

fn write_man_page(dir: &Path, page: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {page}"))?;
    let path = dir.join(format!("{page}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn generate_completions(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let mut cmd = lexdiv::command();
    let name = cmd.get_name().to_string();

    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
