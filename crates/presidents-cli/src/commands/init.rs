//! The `presidents init` command.

use std::path::Path;

use anyhow::Result;

use presidents_core::parser::roster_to_toml;
use presidents_core::Roster;

pub fn execute() -> Result<()> {
    // Create presidents.toml
    if Path::new("presidents.toml").exists() {
        println!("presidents.toml already exists, skipping.");
    } else {
        std::fs::write("presidents.toml", SAMPLE_CONFIG)?;
        println!("Created presidents.toml");
    }

    // Write the built-in roster as an editable starting point
    std::fs::create_dir_all("rosters")?;
    let roster_path = Path::new("rosters/presidents.toml");
    if roster_path.exists() {
        println!("rosters/presidents.toml already exists, skipping.");
    } else {
        let body = roster_to_toml(&Roster::builtin())?;
        std::fs::write(roster_path, format!("{ROSTER_HEADER}{body}"))?;
        println!("Created rosters/presidents.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: presidents quiz --mode practice");
    println!("  2. Edit rosters/presidents.toml and set `roster` in presidents.toml");
    println!("  3. Run: presidents validate --roster rosters/presidents.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# presidents configuration

# Custom roster file. Leave unset to use the built-in roster.
# roster = "rosters/presidents.toml"

# practice | test
default_mode = "practice"

# text | json | markdown
output_format = "text"

[flashcards]
# Any of: number, name, years, party, details, picture
front = ["name"]
back = ["number", "years", "party"]
"#;

const ROSTER_HEADER: &str = "# Roster of presidents. Ordinals must be unique and ascending.\n\
# party is one of: None, Federalist, Democratic-Republican, Democrat, Whig,\n\
# Republican, National Union. end_label = \"present\" marks a running term.\n\n";
