//! SQL Stitcher
//!
//! Assembles the Converzia migration and seed SQL files into one
//! consolidated Supabase setup script.
//!
//! This is the command-line entry point: it loads the thirteen fixed source
//! files under the root directory, applies the fixed patch sequence, writes
//! `supabase/supabase_full_setup.sql`, and prints the absolute output path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stitch_assembler::{AssemblerConfig, SetupAssembler};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Stitch ordered SQL migrations and seed data into a single setup script
#[derive(Debug, Parser)]
#[command(name = "sqlstitch", version, about)]
struct Cli {
    /// Root directory the source manifest is resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the output path
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AssemblerConfig::new().with_root_dir(cli.root);
    let out_path = SetupAssembler::new(config).run_and_write()?;

    println!("{}", out_path.display());
    Ok(())
}
