//! The `presidents quiz` command.
//!
//! A line-driven practice/test session. Starting a mode prompts for every
//! field of every record in order, then reads commands until `quit` or end of
//! input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use presidents_core::statistics::{format_elapsed, AttemptSummary};
use presidents_core::{Field, FieldStatus, Mode, QuizSession, RevealedCell, BASELINE_SCORE};

use crate::config::load_config_from;

pub fn execute(
    mode: Option<Mode>,
    roster_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = config.load_roster(roster_path.as_deref())?;
    let mode = mode.unwrap_or(config.default_mode);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(QuizSession::new(roster), mode, stdin.lock(), stdout.lock())
}

/// Drive `session` from `input`, writing everything to `out`.
pub fn run<R: BufRead, W: Write>(
    mut session: QuizSession,
    mode: Mode,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(
        out,
        "Presidents quiz: {} records. Type `help` for commands.",
        session.roster().len()
    )?;
    begin(&mut session, mode, &mut input, &mut out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command.to_lowercase().as_str() {
            "check" => match session.check() {
                Ok(outcome) => {
                    print_score(&mut out, outcome.score, outcome.correct_count, outcome.max_correct)?;
                    if let (Some(Mode::Test), Some(attempt)) =
                        (session.mode(), session.history().latest())
                    {
                        writeln!(
                            out,
                            "Test finished in {}. Attempt #{} recorded.",
                            attempt.elapsed_display(),
                            attempt.id
                        )?;
                    }
                }
                Err(e) => writeln!(out, "! {e}")?,
            },
            "reveal" => match session.reveal() {
                Ok(()) => print_reveal(&session, &mut out)?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            "resume" => match session.resume_editing() {
                Ok(()) => writeln!(out, "Answers are editable again.")?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            "edit" => {
                let args: Vec<&str> = words.collect();
                edit(&mut session, &args, &mut out)?;
            }
            "sheet" => print_sheet(&session, &mut out)?,
            "practice" => begin(&mut session, Mode::Practice, &mut input, &mut out)?,
            "test" => begin(&mut session, Mode::Test, &mut input, &mut out)?,
            "history" => print_history(&session, &mut out)?,
            "help" => print_help(&mut out)?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Unknown command: {other}. Type `help` for commands.")?,
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Start `mode` and prompt for every answer. `:done` stops early.
fn begin<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mode: Mode,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    session.start(mode);
    tracing::debug!(%mode, "collecting answers");
    writeln!(
        out,
        "Started {mode} mode. Enter each answer (blank to skip, `:done` to stop)."
    )?;

    let numbers: Vec<u32> = session.roster().iter().map(|r| r.number).collect();
    for (index, number) in numbers.into_iter().enumerate() {
        for field in Field::ALL {
            write!(out, "#{number} {field}: ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                writeln!(out)?;
                return Ok(());
            };
            if line.trim() == ":done" {
                return Ok(());
            }
            session.edit(index, field, line)?;
        }
    }
    Ok(())
}

fn edit<W: Write>(session: &mut QuizSession, args: &[&str], out: &mut W) -> Result<()> {
    let usage = "usage: edit <number> <name|start|end|party> <answer>";
    let [number, field, rest @ ..] = args else {
        writeln!(out, "{usage}")?;
        return Ok(());
    };

    let Ok(number) = number.parse::<u32>() else {
        writeln!(out, "{usage}")?;
        return Ok(());
    };
    let field: Field = match field.parse() {
        Ok(field) => field,
        Err(e) => {
            writeln!(out, "! {e}")?;
            return Ok(());
        }
    };
    let Some(index) = session.roster().position_of(number) else {
        writeln!(out, "! no president #{number} in this roster")?;
        return Ok(());
    };

    match session.edit(index, field, rest.join(" ")) {
        Ok(()) => writeln!(out, "Updated #{number} {field}.")?,
        Err(e) => writeln!(out, "! {e}")?,
    }
    Ok(())
}

fn print_score<W: Write>(out: &mut W, score: f64, correct: usize, max: usize) -> Result<()> {
    writeln!(
        out,
        "Score: {score} / {BASELINE_SCORE} | Correct: {correct} / {max}"
    )?;
    Ok(())
}

fn status_mark(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Unchecked => "",
        FieldStatus::Correct => " [ok]",
        FieldStatus::Partial => " [close]",
        FieldStatus::Incorrect => " [wrong]",
    }
}

fn print_sheet<W: Write>(session: &QuizSession, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Start", "End", "Party"]);

    for ((record, answers), statuses) in session
        .roster()
        .iter()
        .zip(session.answers())
        .zip(session.statuses())
    {
        let mut row = vec![Cell::new(record.number)];
        for field in Field::ALL {
            row.push(Cell::new(format!(
                "{}{}",
                answers.get(field),
                status_mark(statuses.get(field))
            )));
        }
        table.add_row(row);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

fn reveal_text(cell: RevealedCell) -> String {
    match cell {
        RevealedCell::Blank { expected } => format!("({expected})"),
        RevealedCell::Correct { given } => given,
        RevealedCell::Mistaken { given, expected } => format!("{given} -> {expected}"),
    }
}

fn print_reveal<W: Write>(session: &QuizSession, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Start", "End", "Party"]);

    for (index, record) in session.roster().iter().enumerate() {
        let mut row = vec![Cell::new(record.number)];
        for field in Field::ALL {
            let text = session
                .revealed_cell(index, field)
                .map(reveal_text)
                .unwrap_or_default();
            row.push(Cell::new(text));
        }
        table.add_row(row);
    }

    writeln!(out, "{table}")?;
    if let Some(score) = session.score() {
        print_score(
            out,
            score,
            session.correct_count().unwrap_or(0),
            session.roster().max_correct(),
        )?;
    }
    Ok(())
}

fn print_history<W: Write>(session: &QuizSession, out: &mut W) -> Result<()> {
    let Some(summary) = AttemptSummary::from_log(session.history()) else {
        writeln!(out, "No test attempts yet.")?;
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Score", "Correct", "Time", "Taken"]);
    for attempt in session.history().newest_first() {
        table.add_row(vec![
            Cell::new(format!("#{}", attempt.id)),
            Cell::new(attempt.score),
            Cell::new(format!("{} / {}", attempt.correct_count, attempt.max_correct)),
            Cell::new(format_elapsed(attempt.elapsed_ms)),
            Cell::new(
                attempt
                    .recorded_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M"),
            ),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{} attempt(s). Best {} | mean {} | fastest {}",
        summary.attempts,
        summary.best_score,
        summary.mean_score,
        summary.fastest_display()
    )?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\
Commands:
  check                          grade the sheet (once per test)
  reveal                         show expected answers
  resume                         hide answers and keep editing (practice)
  edit <n> <field> <answer>      change one answer, field is name|start|end|party
  sheet                          show current answers and statuses
  practice | test                start over in that mode
  history                        list test attempts, newest first
  quit"
    )?;
    Ok(())
}
