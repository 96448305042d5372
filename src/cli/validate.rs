//! Scenario validation command implementation.

use super::CliError;
use melee::game::{ActionKind, Role};
use melee::GameState;
use std::path::PathBuf;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the scenario cannot be parsed or its setup is invalid.
pub(crate) fn execute(scenario: PathBuf) -> Result<(), CliError> {
    println!("Validating: {}", scenario.display());
    println!();

    let parsed = match super::run::load_scenario(&scenario) {
        Ok(parsed) => {
            print_check("Scenario parse", true);
            parsed
        }
        Err(e) => {
            print_check("Scenario parse", false);
            return Err(e);
        }
    };

    match GameState::from_scenario(&parsed) {
        Ok(_) => print_check("Board setup", true),
        Err(e) => {
            print_check("Board setup", false);
            return Err(CliError::from(e));
        }
    }

    // Unknown tokens are tolerated at runtime (they resolve to INVALID
    // ACTION), but flag them here so authors catch typos early.
    let mut unknown = 0_usize;
    for (i, command) in parsed.commands.iter().enumerate() {
        let role_ok = Role::parse(&command.role).is_some();
        let action_ok = ActionKind::parse(&command.action).is_some();
        if !role_ok || !action_ok {
            unknown += 1;
            println!(
                "  warning: command {} has unknown token(s): {} {}",
                i + 1,
                command.role,
                command.action
            );
        }
    }
    print_check("Command tokens", unknown == 0);

    println!();
    println!("Summary:");
    println!("  Board size:   {}x{}", parsed.size, parsed.size);
    println!("  Coins:        {}", parsed.coins.len());
    println!("  Commands:     {}", parsed.commands.len());
    if unknown > 0 {
        println!("  Unknown:      {unknown} command(s) will report INVALID ACTION");
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

/// Print a pass/fail check line.
fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    println!("  {name}... {status}");
}
