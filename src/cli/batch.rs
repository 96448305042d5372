//! Batch command implementation.

use super::output::{format_batch_csv, format_batch_text, JsonBatchResult};
use super::{BatchFormat, CliError};
use indicatif::{ProgressBar, ProgressStyle};
use melee::batch::{run_batch, run_batch_with_progress, BatchStats};
use melee::Scenario;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the batch command.
///
/// # Errors
///
/// Returns an error if any scenario file cannot be loaded.
pub(crate) fn execute(
    scenarios: Vec<PathBuf>,
    threads: Option<usize>,
    format: BatchFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Load all scenarios up front so a bad file fails fast
    let mut loaded = Vec::with_capacity(scenarios.len());
    let mut names = Vec::with_capacity(scenarios.len());

    for path in &scenarios {
        let scenario = Scenario::load(path)
            .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;
        loaded.push(scenario);
        names.push(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        );
    }

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let start = Instant::now();

    let results = if progress {
        let pb = ProgressBar::new(u64::try_from(loaded.len()).unwrap_or(u64::MAX));
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scenarios",
            )
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        let results = run_batch_with_progress(&loaded, || pb.inc(1));
        pb.finish_with_message("done");
        results
    } else {
        run_batch(&loaded)
    };

    let duration = start.elapsed();
    let stats = BatchStats::from_results(&results);

    match format {
        BatchFormat::Text => {
            println!();
            print!("{}", format_batch_text(&stats, &names, &results));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        BatchFormat::Json => {
            let json_result = JsonBatchResult::from_stats(&stats, &names, &results);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        BatchFormat::Csv => {
            print!("{}", format_batch_csv(&names, &results));
        }
    }

    Ok(())
}
