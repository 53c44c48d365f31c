//! The `presidents validate` command.

use std::path::PathBuf;

use anyhow::Result;

use presidents_core::parser::{load_roster_directory, parse_roster, validate_roster};

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let rosters = if roster_path.is_dir() {
        load_roster_directory(&roster_path)?
    } else {
        vec![(roster_path.clone(), parse_roster(&roster_path)?)]
    };

    let mut total_warnings = 0;

    for (path, roster) in &rosters {
        println!("Roster: {} ({} presidents)", path.display(), roster.len());

        let warnings = validate_roster(roster);
        for w in &warnings {
            let prefix = w
                .number
                .map(|n| format!("  [#{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if rosters.is_empty() {
        println!("No rosters found.");
    } else if total_warnings == 0 {
        println!("All rosters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
