//! The `presidents flashcards` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use presidents_core::flashcards::{CardField, CardLayout, FlashcardDeck, Rating};

use crate::config::load_config_from;

pub fn execute(
    front: Option<String>,
    back: Option<String>,
    seed: Option<u64>,
    roster_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = config.load_roster(roster_path.as_deref())?;

    let mut layout = config.flashcards.layout();
    if let Some(front) = front {
        layout.front = parse_fields(&front)?;
    }
    if let Some(back) = back {
        layout.back = parse_fields(&back)?;
    }

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        FlashcardDeck::new(roster, layout),
        rng,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Parse a comma-separated field list such as `name,years`.
fn parse_fields(list: &str) -> Result<Vec<CardField>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<CardField>().map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

/// Drive `deck` from `input`, writing everything to `out`.
pub fn run<R: BufRead, W: Write>(
    mut deck: FlashcardDeck,
    mut rng: StdRng,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}", layout_summary(deck.layout()))?;
    print_card(&deck, &mut out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "next" | "n" => {
                if !deck.next() {
                    writeln!(out, "Already at the last card.")?;
                }
            }
            "prev" | "p" => {
                if !deck.previous() {
                    writeln!(out, "Already at the first card.")?;
                }
            }
            "flip" | "f" => deck.flip(),
            "know" => deck.rate(Rating::Good),
            "dont-know" | "don't-know" => deck.rate(Rating::Bad),
            "clear" => deck.rate(Rating::Neutral),
            "shuffle" => deck.shuffle(&mut rng),
            "reset" => deck.reset_order(),
            "table" => {
                print_table(&deck, &mut out)?;
                continue;
            }
            "help" => {
                writeln!(
                    out,
                    "Commands: next, prev, flip, know, dont-know, clear, shuffle, reset, table, quit"
                )?;
                continue;
            }
            "quit" | "exit" | "q" => break,
            other => {
                writeln!(out, "Unknown command: {other}. Type `help` for commands.")?;
                continue;
            }
        }
        print_card(&deck, &mut out)?;
    }

    Ok(())
}

fn layout_summary(layout: &CardLayout) -> String {
    let names = |fields: &[CardField]| {
        fields
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Front: {} | Back: {}",
        names(layout.effective_front()),
        names(layout.effective_back())
    )
}

fn print_card<W: Write>(deck: &FlashcardDeck, out: &mut W) -> Result<()> {
    let Some(view) = deck.view() else {
        writeln!(out, "The deck is empty.")?;
        return Ok(());
    };

    let side = if view.flipped { "Back" } else { "Front" };
    let rating = match view.rating {
        Rating::Neutral => String::new(),
        other => format!(" [{other}]"),
    };
    writeln!(out, "Card {}/{} ({side}){rating}", view.position, view.total)?;
    for line in &view.lines {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn print_table<W: Write>(deck: &FlashcardDeck, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "President", "Years", "Party", "Rating"]);
    for (record, rating) in deck.by_mastery() {
        table.add_row(vec![
            Cell::new(record.number),
            Cell::new(&record.full_name),
            Cell::new(record.span()),
            Cell::new(record.party),
            Cell::new(rating),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}
