use crate::config::GameConfig;
use crate::error::{GameError, Result};
use guess_hints::{ConceptManager, Direction, Feedback, Generation, HintPool};
use guess_numbers::{validate_in_range, RandomSource, SeededRandom};
use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

/// Answer to a hint request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HintResponse {
    Hint(String),
    /// The pool is exhausted; only the direction of the winning number is left
    GreaterLess(Direction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct {
        guesses_used: usize,
    },
    Wrong {
        hint: HintResponse,
        remaining: u32,
    },
    OutOfGuesses {
        winning_number: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    InProgress,
    Won,
    Lost,
}

/// One game: a fixed winning number, its hint pool and the guess history.
#[derive(Debug)]
pub struct Game {
    winning_number: i64,
    seed: u64,
    rng: SeededRandom,
    manager: ConceptManager,
    pool: HintPool,
    bounds: RangeInclusive<i64>,
    max_guesses: u32,
    guesses: Vec<i64>,
    state: GameState,
}

impl Game {
    /// Start a game on a known winning number.
    ///
    /// Guesses are bounded by the default `[1, 100]` range, widened to take in
    /// `winning_number` when it falls outside.
    pub fn start(winning_number: i64, seed: u64) -> Result<Self> {
        Self::start_with_limit(winning_number, seed, GameConfig::default().max_guesses)
    }

    pub fn start_with_limit(winning_number: i64, seed: u64, max_guesses: u32) -> Result<Self> {
        if max_guesses == 0 {
            return Err(GameError::invalid_config("max_guesses must be > 0"));
        }
        let defaults = GameConfig::default();
        let bounds = defaults.min.min(winning_number)..=defaults.max.max(winning_number);
        Self::build(winning_number, SeededRandom::new(seed), bounds, max_guesses)
    }

    /// Draw the winning number from the configured range and start a game on it.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let seed = config
            .seed
            .unwrap_or_else(|| SeededRandom::from_entropy().seed());
        let mut rng = SeededRandom::new(seed);

        let high = config
            .max
            .checked_add(1)
            .ok_or_else(|| GameError::invalid_config("max must be below i64::MAX"))?;
        let winning_number = rng
            .draw(config.min, high, 1)?
            .first()
            .copied()
            .ok_or_else(|| GameError::invalid_config("empty number range"))?;

        Self::build(winning_number, rng, config.min..=config.max, config.max_guesses)
    }

    fn build(
        winning_number: i64,
        mut rng: SeededRandom,
        bounds: RangeInclusive<i64>,
        max_guesses: u32,
    ) -> Result<Self> {
        let manager = ConceptManager::new(winning_number);
        let hints = manager.generate_hints(Generation::Sampled, &mut rng)?;
        log::debug!("Game started (seed {}) with {} hints", rng.seed(), hints.len());

        Ok(Self {
            winning_number,
            seed: rng.seed(),
            rng,
            manager,
            pool: HintPool::new(hints),
            bounds,
            max_guesses,
            guesses: Vec::new(),
            state: GameState::InProgress,
        })
    }

    /// Reject guesses outside the game's range before any property of them is computed.
    pub fn validate_guess(&self, guess: i64) -> Result<()> {
        let (min, max) = (*self.bounds.start(), *self.bounds.end());
        validate_in_range(guess, min, max)
            .map(|_| ())
            .map_err(|_| GameError::GuessOutOfRange { guess, min, max })
    }

    /// Next hint for a wrong `guess`, or the greater/less signal once hints run out.
    pub fn request_hint(&mut self, guess: i64) -> Result<HintResponse> {
        self.validate_guess(guess)?;
        if guess == self.winning_number {
            return Err(GameError::CorrectGuess(guess));
        }
        match self.pool.select_next_hint(guess, &mut self.rng)? {
            Some(hint) => Ok(HintResponse::Hint(hint)),
            None => Ok(HintResponse::GreaterLess(
                ConceptManager::check_greater_or_less(guess, self.winning_number),
            )),
        }
    }

    /// Would `guess` keep `hint` true?
    pub fn evaluate(&self, guess: i64, hint: &str) -> Result<Feedback> {
        self.validate_guess(guess)?;
        Ok(self.manager.evaluate_guess(guess, hint)?)
    }

    /// Record a guess and answer it with a win, a hint, or the loss.
    ///
    /// An out-of-range guess is rejected without using up a guess.
    pub fn submit_guess(&mut self, guess: i64) -> Result<GuessOutcome> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }
        self.validate_guess(guess)?;
        self.guesses.push(guess);

        if guess == self.winning_number {
            self.state = GameState::Won;
            log::debug!("Won after {} guess(es)", self.guesses.len());
            return Ok(GuessOutcome::Correct {
                guesses_used: self.guesses.len(),
            });
        }

        if self.guesses_remaining() == 0 {
            self.state = GameState::Lost;
            return Ok(GuessOutcome::OutOfGuesses {
                winning_number: self.winning_number,
            });
        }

        let hint = self.request_hint(guess)?;
        Ok(GuessOutcome::Wrong {
            hint,
            remaining: self.guesses_remaining(),
        })
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> u32 {
        let used = u32::try_from(self.guesses.len()).unwrap_or(u32::MAX);
        self.max_guesses.saturating_sub(used)
    }

    #[must_use]
    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    #[must_use]
    pub fn given_hints(&self) -> &[String] {
        self.pool.given()
    }

    #[must_use]
    pub fn hint_pool(&self) -> &HintPool {
        &self.pool
    }

    #[must_use]
    pub fn concept_manager(&self) -> &ConceptManager {
        &self.manager
    }

    /// Inclusive range every guess must fall in.
    #[must_use]
    pub fn bounds(&self) -> RangeInclusive<i64> {
        self.bounds.clone()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The hidden number. Callers decide when it may be shown.
    #[must_use]
    pub const fn winning_number(&self) -> i64 {
        self.winning_number
    }
}
