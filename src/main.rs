//! Offline build-step utility that computes a representative RGB color for
//! each named texture image and persists it in a small SQLite cache, then
//! prints a legend report: the fixed legacy color table followed by one
//! `name r g b` line per input record read from stdin.

mod args;
mod color_extract;
mod color_store;
mod legacy_table;
mod report;
mod texture_index;

use args::{validate_args, Args};
use clap::Parser;
use color_store::ColorStore;
use colored::Colorize;
use std::io;
use texture_index::TextureIndex;

fn main() {
    let args: Args = Args::parse();

    if let Err(e) = validate_args(&args).and_then(|()| run(&args)) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let index = TextureIndex::scan(&args.textures);
    if args.debug {
        eprintln!(
            "Indexed {} texture files under {}",
            index.len(),
            args.textures.display()
        );
    }

    let store = ColorStore::open(&args.cache)
        .map_err(|e| format!("Failed to open color cache {}: {}", args.cache.display(), e))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    report::emit_report(stdin.lock(), &mut stdout.lock(), &store, &index)?;

    if args.debug {
        let entries = store
            .entry_count()
            .map_err(|e| format!("Failed to count cache entries: {}", e))?;
        eprintln!("Color cache now holds {} entries", entries);
    }

    store
        .commit()
        .map_err(|e| format!("Failed to commit color cache {}: {}", args.cache.display(), e))?;

    Ok(())
}
