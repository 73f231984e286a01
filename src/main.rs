use anyhow::{Context, Result};
use clap::Parser;
use headless::{
    logging,
    strip::{HeaderStripper, ARCHIVE_DIR_NAME},
};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Remove the header row from every CSV file in the current directory",
    long_about = "Remove the header row from every CSV file in the current directory.\n\n\
                  Originals are moved into an 'old' subdirectory. Running it twice strips \
                  another row from each file."
)]
struct Args {}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init("info,headless=info");
    let _args = Args::parse();

    // ─── 2) first scan ───────────────────────────────────────────────
    let cwd = env::current_dir().context("resolving current directory")?;
    let stripper = HeaderStripper::new(&cwd);
    let found = stripper.discover()?;
    println!("The following CSV files have been found:\n{:?}", found);

    // ─── 3) strip, archive, rescan, rename ───────────────────────────
    let summary = stripper.process(&found)?;
    info!(
        files = summary.renamed.len(),
        records = summary.records_written,
        "all done"
    );

    println!(
        "\nCSV headers have been removed. Old files are stored in the '{}' folder at:\n{}",
        ARCHIVE_DIR_NAME,
        summary.archive_dir.display()
    );
    Ok(())
}
