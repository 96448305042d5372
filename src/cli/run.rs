//! Run command implementation.

use super::output::JsonSessionReport;
use super::{CliError, OutputFormat};
use melee::{run_session, Scenario};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded or rejected at setup.
pub(crate) fn execute(
    scenario: PathBuf,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let scenario = load_scenario(&scenario)?;

    let report = run_session(&scenario)?;

    match format {
        OutputFormat::Text => {
            if !quiet {
                for line in &report.lines {
                    println!("{line}");
                }
            }
            println!("{}", report.verdict);
        }
        OutputFormat::Json => {
            let json_report = JsonSessionReport::from_report(&report);
            let json = serde_json::to_string_pretty(&json_report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load a scenario from a file, or from stdin when the path is `-`.
pub(crate) fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| CliError::new(format!("Failed to read stdin: {e}")))?;
        Scenario::parse(&input).map_err(CliError::from)
    } else {
        Scenario::load(path)
            .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))
    }
}
