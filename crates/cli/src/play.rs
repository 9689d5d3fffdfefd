use anyhow::Result;
use guess_game::{Direction, Game, GameConfig, GameError, GuessOutcome, HintResponse};
use std::io::{BufRead, Write};

/// Line-oriented game loop. Before answering a guess, every hint shown so far
/// is re-checked against it so the player sees which ones still hold.
pub fn play<R: BufRead, W: Write>(
    mut game: Game,
    config: &GameConfig,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(
        out,
        "Guess a number between {} and {}. You have {} guesses.",
        config.min,
        config.max,
        game.guesses_remaining()
    )?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "q" | "quit" | "exit") {
            writeln!(out, "The number was {}.", game.winning_number())?;
            return Ok(());
        }

        let guess: i64 = match trimmed.parse() {
            Ok(guess) => guess,
            Err(_) => {
                writeln!(out, "Not a whole number: {trimmed}")?;
                continue;
            }
        };

        if let Err(GameError::GuessOutOfRange { min, max, .. }) = game.validate_guess(guess) {
            writeln!(out, "Guess must be between {min} and {max}.")?;
            continue;
        }

        for hint in game.given_hints() {
            let feedback = game.evaluate(guess, hint)?;
            writeln!(out, "  [{feedback}] {hint}")?;
        }

        match game.submit_guess(guess)? {
            GuessOutcome::Correct { guesses_used } => {
                writeln!(out, "Correct! You found it in {guesses_used} guess(es).")?;
            }
            GuessOutcome::Wrong { hint, remaining } => {
                match hint {
                    HintResponse::Hint(text) => writeln!(out, "Hint: {text}")?,
                    HintResponse::GreaterLess(Direction::Greater) => {
                        writeln!(out, "The number is greater than {guess}.")?;
                    }
                    HintResponse::GreaterLess(Direction::Less) => {
                        writeln!(out, "The number is less than {guess}.")?;
                    }
                }
                writeln!(out, "{remaining} guess(es) left.")?;
            }
            GuessOutcome::OutOfGuesses { winning_number } => {
                writeln!(out, "Out of guesses. The number was {winning_number}.")?;
            }
        }
        out.flush()?;

        if game.is_over() {
            return Ok(());
        }
    }

    log::debug!("input closed after {} guess(es)", game.guesses().len());
    Ok(())
}
