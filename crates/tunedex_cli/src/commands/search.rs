//! Search command implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tunedex_core::{parse_songs, Catalog};

/// Runs the search command.
///
/// Loads the ingestion file into a fresh in-memory catalog - the full
/// allocate/encode/claim pipeline - and runs a free-text search over
/// it. A dry run of exactly what a serving catalog would answer.
pub fn run(path: &Path, query: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let parsed = parse_songs(BufReader::new(file))?;
    if !parsed.rejected.is_empty() {
        eprintln!(
            "warning: {} lines rejected, run `tunedex check` for details",
            parsed.rejected.len()
        );
    }

    let catalog = Catalog::in_memory();
    let report = catalog.ingest(&parsed.songs)?;
    if !report.is_complete() {
        eprintln!("warning: {} records failed to ingest", report.failures.len());
    }

    let results = catalog.search(query)?;
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        _ => {
            if results.is_empty() {
                println!("There is no results.");
            } else {
                for song in &results {
                    println!("{song}");
                }
            }
        }
    }
    Ok(())
}
