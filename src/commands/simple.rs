//! Simple interactive CLI mode
//!
//! The person holding the secret types the score for each suggested guess.

use crate::core::{CODE_SPACE, Code};
use crate::output::ScanProgressBar;
use crate::output::formatters::score_to_pegs;
use crate::solver::{GuessSelector, Phase, Session, SolverError, Tier};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Run the interactive solver, reading commands from `input`
///
/// Accepts a score 0-4 after each suggestion, plus `undo`, `new` and `quit`.
/// End of input ends the session quietly.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or on an
/// internal solver failure.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead, W: Write>(
    selector: &GuessSelector,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║            Code Breaker - Global Minimax Solver              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Think of a 4-digit secret (0000-9999, repeats allowed).")?;
    writeln!(out, "After each guess, enter how many digits are in the right place (0-4).")?;
    writeln!(out, "Some suggestions cannot be the secret: they are chosen to split the")?;
    writeln!(out, "remaining possibilities so a later guess is sure to hit.\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last score\n")?;

    let mut session = Session::new(selector.clone());

    loop {
        if session.phase() == Phase::Contradiction {
            writeln!(out, "\n❌ No secret matches every score so far; one of them was probably mistyped.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

            match read_line(&mut input, &mut out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return farewell(&mut out),
                Some("undo" | "u") => {
                    session.undo();
                    writeln!(out, "✓ Undone! Back to turn {}\n", session.turn())?;
                }
                Some("new" | "n") => {
                    session.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Some(other) => {
                    writeln!(out, "❌ Unknown command '{other}': type 'undo', 'new' or 'quit'\n")?;
                }
            }
            continue;
        }

        let remaining = session.candidates().len();
        let search_space = match selector.tier(remaining, session.turn()) {
            Tier::GlobalMinimax => CODE_SPACE,
            Tier::RestrictedMinimax => remaining,
            Tier::Opening | Tier::Finish | Tier::Coverage(_) => 0,
        };

        let progress = ScanProgressBar::for_search_space(search_space);
        let start = Instant::now();
        let guess = session.next_guess_with_progress(&progress)?;
        progress.finish();
        let elapsed = start.elapsed();

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "Turn {}: {remaining} candidates remaining", session.turn())?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "\n>>> Suggested guess: {} (computed in {:.2}s)",
            guess.to_string().bright_yellow().bold(),
            elapsed.as_secs_f64()
        )?;
        if !session.candidates().contains(&guess) {
            writeln!(out, "    {}", "(probe only, cannot be the secret)".bright_black())?;
        }
        if remaining <= 10 {
            let listed: Vec<String> = session.candidates().iter().map(ToString::to_string).collect();
            writeln!(out, "    Candidates: {}", listed.join(", "))?;
        }
        writeln!(out)?;

        loop {
            let Some(line) = read_line(&mut input, &mut out, "Score (0-4, or command)")? else {
                return farewell(&mut out);
            };

            match line.as_str() {
                "quit" | "q" | "exit" => return farewell(&mut out),
                "new" | "n" => {
                    session.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    break;
                }
                "undo" | "u" => {
                    if session.undo().is_some() {
                        writeln!(out, "✓ Undone! Back to turn {}\n", session.turn())?;
                    } else {
                        writeln!(out, "Nothing to undo!\n")?;
                    }
                    break;
                }
                _ => {}
            }

            let Ok(raw) = line.parse::<u8>() else {
                writeln!(out, "❌ Enter a number from 0 to 4\n")?;
                continue;
            };

            match session.record_feedback(guess, raw) {
                Ok(update) => {
                    if let Phase::Solved(secret) = session.phase() {
                        print_victory(&mut out, &session, secret)?;
                        match read_line(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                            Some("yes" | "y") => {
                                session.reset();
                                writeln!(out, "\n🔄 New game started!\n")?;
                            }
                            _ => return farewell(&mut out),
                        }
                    } else {
                        writeln!(
                            out,
                            "   -> eliminated {}, {} remain\n",
                            update.eliminated, update.remaining
                        )?;
                    }
                    break;
                }
                Err(SolverError::InvalidScore(value)) => {
                    writeln!(out, "❌ {value} is not a valid score, enter 0-4\n")?;
                }
                Err(SolverError::Contradiction { .. }) => break,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn print_victory<W: Write>(out: &mut W, session: &Session, secret: Code) -> Result<()> {
    let turns = session.history().len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉  C O D E   C R A C K E D !  🎉        "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  The secret is {} - found in {} {}",
        secret.to_string().bright_yellow().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "turn" } else { "turns" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (guess, score)) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            score_to_pegs(*score)
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lower-cased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SelectorConfig;
    use std::io::Cursor;

    fn run_with(selector: &GuessSelector, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(selector, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run(script: &str) -> String {
        run_with(&GuessSelector::default(), script)
    }

    #[test]
    fn first_suggestion_is_opening() {
        let output = run("quit\n");
        assert!(output.contains("0123"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn immediate_win() {
        let output = run("4\nno\n");
        assert!(output.contains("C O D E   C R A C K E D"));
        assert!(output.contains("found in"));
    }

    #[test]
    fn invalid_score_is_reprompted() {
        let output = run("7\nabc\n0\nquit\n");
        assert!(output.contains("7 is not a valid score"));
        assert!(output.contains("Enter a number from 0 to 4"));
        assert!(output.contains("eliminated 3439, 6561 remain"));
    }

    #[test]
    fn contradiction_then_undo() {
        // Replaying the opening as the coverage probe makes a conflicting score easy
        let zero = Code::new("0000").unwrap();
        let config = SelectorConfig::new(zero, vec![zero], 0, 2);
        let output = run_with(&GuessSelector::new(config), "0\n1\nundo\nquit\n");

        assert!(output.contains("No secret matches every score"));
        assert!(output.contains("Undone! Back to turn 2"));
    }

    #[test]
    fn unknown_command_after_contradiction_gets_hint() {
        let zero = Code::new("0000").unwrap();
        let config = SelectorConfig::new(zero, vec![zero], 0, 2);
        let output = run_with(&GuessSelector::new(config), "0\n1\n2\nnew\nquit\n");

        assert!(output.contains("Unknown command '2'"));
        assert!(output.contains("New game started"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let output = run("");
        assert!(output.contains("Thanks for playing"));
    }
}
