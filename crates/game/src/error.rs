use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Hint error: {0}")]
    Hint(#[from] guess_hints::HintError),

    #[error("Number error: {0}")]
    Number(#[from] guess_numbers::NumberError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A guess was submitted after the game was won or lost
    #[error("Game is already over")]
    GameOver,

    #[error("Guess {guess} must be between {min} and {max}")]
    GuessOutOfRange { guess: i64, min: i64, max: i64 },

    /// Hints only exist for wrong guesses
    #[error("Guess {0} is the winning number")]
    CorrectGuess(i64),

    #[error("IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl GameError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
