//! # Guess Numbers
//!
//! Integer properties the hint engine reasons about, plus the seedable random
//! source every other crate draws from.
//!
//! ## Example
//!
//! ```rust
//! use guess_numbers::{factors, is_prime, RandomSource, SeededRandom};
//!
//! assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);
//! assert!(is_prime(7));
//!
//! let mut rng = SeededRandom::new(42);
//! let picks = rng.draw(1, 6, 2).unwrap();
//! assert_eq!(picks.len(), 2);
//! ```

mod error;
mod properties;
mod random;

pub use error::{NumberError, Result};
pub use properties::{
    digit_length, digit_sum, digits, factor_count, factors, is_factor, is_perfect_cube,
    is_perfect_square, is_prime, prime_factor_count, validate_in_range,
};
pub use random::{random_in_range, RandomSource, SeededRandom};
