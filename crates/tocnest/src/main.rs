//! Post-build tool that nests inner-type entries under their parents in a
//! DocFX-generated `toc.yml`.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use libtocnest::{Result, TocError, process_file};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line interface for the tocnest binary.
struct Cli {
    /// Path to the toc.yml to rewrite; defaults to ../api/toc.yml relative
    /// to the binary's own directory
    path: Option<PathBuf>,
}

/// The conventional toc location: `api/toc.yml` under the parent of the
/// directory holding the binary.
fn default_toc_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let base = exe
        .parent()
        .and_then(|dir| dir.parent())
        .ok_or_else(|| io::Error::other("cannot determine the binary's parent directory"))?;
    Ok(base.join("api").join("toc.yml"))
}

/// Resolve the target path and run the transform against it.
fn run(cli: &Cli) -> Result<()> {
    let toc_path = match &cli.path {
        Some(path) => path.clone(),
        None => default_toc_path()?,
    };

    if !toc_path.exists() {
        return Err(TocError::FileNotFound(toc_path));
    }

    println!("Processing {}...", toc_path.display());
    process_file(&toc_path)?;
    println!("TOC restructured successfully!");

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Only initialize tracing if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
