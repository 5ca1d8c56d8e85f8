//! Check command implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tunedex_core::parse_songs;

/// Runs the check command.
///
/// Parses the ingestion file and reports per-line outcomes. Exits with
/// an error when any line was rejected, so the command doubles as a
/// lint in scripts.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let report = parse_songs(BufReader::new(file))?;

    match format {
        "json" => {
            let rejected: Vec<serde_json::Value> = report
                .rejected
                .iter()
                .map(|rejected| {
                    serde_json::json!({
                        "line": rejected.line_number,
                        "text": rejected.line,
                        "reason": rejected.reason.to_string(),
                    })
                })
                .collect();
            let value = serde_json::json!({
                "accepted": report.songs,
                "rejected": rejected,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            println!(
                "{}: {} accepted, {} rejected",
                path.display(),
                report.songs.len(),
                report.rejected.len()
            );
            for rejected in &report.rejected {
                println!(
                    "  line {}: {} ({:?})",
                    rejected.line_number, rejected.reason, rejected.line
                );
            }
        }
    }

    if report.rejected.is_empty() {
        Ok(())
    } else {
        Err(format!("{} lines rejected", report.rejected.len()).into())
    }
}
