//! # Guess Hints
//!
//! Hint generation and guess evaluation for the number guessing game.
//!
//! ## Architecture
//!
//! ```text
//! winning number
//!     │
//!     ├──> ConceptManager (Factor, Multiple, Prime, EvenOdd,
//!     │    PerfectSquare, PerfectCube, DigitSum, DigitLength)
//!     │      └─> HintTemplates::render → hint text
//!     │
//!     └──> HintPool (pool = relevant ∪ redundant, given)
//!            └─> select_next_hint(guess) demotes hints the guess
//!                reproduces, then samples one
//!
//! hint text + new guess
//!     └──> HintTemplates::parse → concept + shape + params
//!            └─> recompute on the guess → good / bad
//! ```
//!
//! ## Example
//!
//! ```rust
//! use guess_hints::{ConceptManager, Feedback, Generation};
//! use guess_numbers::SeededRandom;
//!
//! let manager = ConceptManager::new(12);
//! let hints = manager
//!     .generate_hints(Generation::Sampled, &mut SeededRandom::new(7))
//!     .unwrap();
//! assert!(hints.contains(&"The number of factors it has is 6.".to_string()));
//!
//! let feedback = manager
//!     .evaluate_guess(24, "The number of factors it has is 6.")
//!     .unwrap();
//! assert_eq!(feedback, Feedback::Bad);
//! ```

mod concepts;
mod error;
mod manager;
mod pool;
mod templates;
mod types;

pub use concepts::{
    all_concepts, concept_for, Concept, DigitLengthConcept, DigitSumConcept, EvenOddConcept,
    FactorConcept, MultipleConcept, PerfectCubeConcept, PerfectSquareConcept, PrimeNumberConcept,
};
pub use error::{HintError, Result};
pub use manager::ConceptManager;
pub use pool::HintPool;
pub use templates::{HintTemplate, HintTemplates, HINT_TEMPLATES};
pub use types::{
    ConceptKind, Direction, Feedback, Generation, HintParam, HintShape, Parity, ParsedHint,
};
