//! Interactive terminal game
//!
//! Plays one game against the engine from a line-based input stream.

use crate::core::WORD_LENGTH;
use crate::engine::GameEngine;
use crate::error::GameError;
use crate::output::{feedback_tiles, feedback_to_emoji};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a played game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub solved: bool,
    pub turns: usize,
    pub word: String,
}

/// Run one interactive game
///
/// Input is read line by line; `quit` or end of input gives up and reveals
/// the word. Guesses are lower-cased and must be five letters before they
/// reach the engine.
///
/// # Errors
///
/// Returns an error if the game cannot be created (empty dictionary) or on
/// I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    engine: &GameEngine,
    mut input: R,
    mut out: W,
) -> Result<PlayOutcome> {
    let game = engine.create_game(Some("terminal".to_string()))?;

    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "  Guess the five-letter word!".bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "Type 'quit' to give up.\n")?;

    let mut line = String::new();
    loop {
        let turn = engine.get_game(&game.id)?.turns() + 1;
        write!(out, "Guess {turn}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return give_up(engine, &game.id, &mut out);
        }
        let guess = line.trim().to_lowercase();

        match guess.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return give_up(engine, &game.id, &mut out),
            _ => {}
        }

        if guess.chars().count() != WORD_LENGTH {
            writeln!(out, "Guesses must be exactly {WORD_LENGTH} letters.")?;
            continue;
        }

        match engine.submit_guess(&game.id, &guess) {
            Ok(updated) => {
                let Some(feedback) = updated.feedback.last() else {
                    continue;
                };
                writeln!(out, "  {}  {}", feedback_tiles(feedback), feedback_to_emoji(feedback))?;

                if updated.solved {
                    let turns = updated.turns();
                    writeln!(
                        out,
                        "\n{} in {turns} {}!\n",
                        "Solved".bright_green().bold(),
                        if turns == 1 { "guess" } else { "guesses" }
                    )?;
                    return Ok(PlayOutcome {
                        solved: true,
                        turns,
                        word: updated.word,
                    });
                }
            }
            Err(GameError::InvalidWord(word)) => {
                writeln!(out, "'{word}' is not in the word list.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn give_up<W: Write>(engine: &GameEngine, id: &str, out: &mut W) -> Result<PlayOutcome> {
    let game = engine.get_game(id)?;
    writeln!(out, "\nThe word was {}.\n", game.word.to_uppercase().bright_yellow().bold())?;

    Ok(PlayOutcome {
        solved: false,
        turns: game.turns(),
        word: game.word,
    })
}
