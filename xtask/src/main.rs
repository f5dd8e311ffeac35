//! Development tasks for the readscore workspace.
//!
//! ```text
//! cargo run -p xtask -- man           # man pages into target/dist/man
//! cargo run -p xtask -- completions   # shell completions into target/dist/completions
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "readscore development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,

    /// Output directory (default: target/dist)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and every subcommand
    Man,
    /// Generate shell completion scripts
    Completions,
    /// Generate man pages and completions
    Dist,
}

fn main() -> anyhow::Result<()> {
    let xtask = Xtask::parse();
    let out_dir = xtask.out_dir.unwrap_or_else(default_out_dir);

    match xtask.task {
        Task::Man => man(&out_dir.join("man")),
        Task::Completions => completions(&out_dir.join("completions")),
        Task::Dist => {
            man(&out_dir.join("man"))?;
            completions(&out_dir.join("completions"))
        }
    }
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("target")
        .join("dist")
}

fn man(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let cmd = readscore::command();
    clap_mangen::generate_to(cmd, dir)
        .with_context(|| format!("failed to write man pages to {}", dir.display()))?;

    println!("man pages written to {}", dir.display());
    Ok(())
}

fn completions(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut cmd = readscore::command();
    let bin_name = cmd.get_name().to_string();
    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin_name, dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
