//! List command - show cached library images

use super::blocking;
use crate::cache::{CacheEntry, LibraryCache};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::CacheResult;
use console::style;

/// Format bytes as human-readable size (e.g., "1.5 GB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Execute the list command
pub async fn execute(args: ListArgs, cache: &LibraryCache) -> CacheResult<()> {
    let lister = cache.clone();
    let entries = blocking(move || lister.entries()).await?;

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("No cached images in {}", cache.dir().library().display()),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!(
        "{:<40} {:>10} {:<20}",
        style("NAME").bold(),
        style("SIZE").bold(),
        style("MODIFIED").bold()
    );
    println!("{}", "-".repeat(72));

    let mut total = 0;
    for entry in entries {
        let modified = entry
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<40} {:>10} {:<20}",
            entry.name,
            format_bytes(entry.size_bytes),
            modified
        );
        total += entry.size_bytes;
    }

    println!();
    println!("{} image(s), {}", entries.len(), format_bytes(total));
}

fn print_json(entries: &[CacheEntry]) -> CacheResult<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

fn print_plain(entries: &[CacheEntry]) {
    for entry in entries {
        println!("{}", entry.name);
    }
}
