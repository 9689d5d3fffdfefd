//! One [`Concept`] per mathematical property.
//!
//! A concept is bound to a single winning number for generation, but evaluates
//! guesses purely from hint text: the instance judging a later guess need not be
//! the one that produced the hint.

mod digits;
mod even_odd;
mod factor;
mod multiple;
mod perfect_power;
mod prime;

pub use digits::{DigitLengthConcept, DigitSumConcept};
pub use even_odd::EvenOddConcept;
pub use factor::FactorConcept;
pub use multiple::MultipleConcept;
pub use perfect_power::{PerfectCubeConcept, PerfectSquareConcept};
pub use prime::PrimeNumberConcept;

use crate::error::{HintError, Result};
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Feedback, Generation, HintParam, HintShape, ParsedHint, Parity};
use guess_numbers::{digit_length, digits, RandomSource};

pub trait Concept {
    fn kind(&self) -> ConceptKind;

    /// The winning number this instance generates hints for.
    fn winning_number(&self) -> i64;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether this concept contributes hints for the bound winning number.
    fn include_concept(&self) -> bool;

    fn generate_hints(
        &self,
        generation: Generation,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>>;

    /// Structured meaning of `hint`, or `None` if this concept never phrases hints that way.
    fn parse_hint(&self, hint: &str) -> Result<Option<ParsedHint>> {
        HintTemplates::parse(self.kind(), hint)
    }

    /// Whether the assertion in `parsed` holds for `guess`.
    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool>;

    fn evaluate_guess(&self, guess: i64, hint: &str) -> Result<Feedback> {
        let parsed = self
            .parse_hint(hint)?
            .ok_or_else(|| HintError::unrecognized(hint))?;
        let holds = self.holds_for(guess, &parsed)?;
        log::debug!(
            "{} hint {:?} ({}) is {} for guess {guess}",
            self.name(),
            hint,
            parsed.shape.as_str(),
            if holds { "kept" } else { "broken" }
        );
        Ok(Feedback::from(holds))
    }
}

/// Build the concept family for `winning_number` in generation order.
#[must_use]
pub fn all_concepts(winning_number: i64) -> Vec<Box<dyn Concept>> {
    ConceptKind::ALL
        .into_iter()
        .map(|kind| concept_for(kind, winning_number))
        .collect()
}

#[must_use]
pub fn concept_for(kind: ConceptKind, winning_number: i64) -> Box<dyn Concept> {
    match kind {
        ConceptKind::Factor => Box::new(FactorConcept::new(winning_number)),
        ConceptKind::Multiple => Box::new(MultipleConcept::new(winning_number)),
        ConceptKind::PrimeNumber => Box::new(PrimeNumberConcept::new(winning_number)),
        ConceptKind::EvenOdd => Box::new(EvenOddConcept::new(winning_number)),
        ConceptKind::PerfectSquare => Box::new(PerfectSquareConcept::new(winning_number)),
        ConceptKind::PerfectCube => Box::new(PerfectCubeConcept::new(winning_number)),
        ConceptKind::DigitSum => Box::new(DigitSumConcept::new(winning_number)),
        ConceptKind::DigitLength => Box::new(DigitLengthConcept::new(winning_number)),
    }
}

/// Numbers with fewer digits get no digit-count hints.
const MIN_DIGITS_FOR_DIGIT_HINT: usize = 2;

pub(crate) fn count_digits(n: i64, predicate: impl Fn(u8) -> bool) -> usize {
    digits(n).into_iter().filter(|&d| predicate(d)).count()
}

/// Render a digit-count hint, or `None` when `n` is too short to merit one.
///
/// `extra` fills the slots after `{count}` (e.g. the parity word).
pub(crate) fn digit_count_hint(
    kind: ConceptKind,
    n: i64,
    extra: &[HintParam],
    predicate: impl Fn(u8) -> bool,
) -> Result<Option<String>> {
    if digit_length(n) < MIN_DIGITS_FOR_DIGIT_HINT {
        return Ok(None);
    }
    let mut params = vec![HintParam::try_from(count_digits(n, predicate))?];
    params.extend_from_slice(extra);
    HintTemplates::render(kind, HintShape::DigitCount, &params).map(Some)
}

pub(crate) fn int_param(parsed: &ParsedHint, idx: usize) -> Result<i64> {
    parsed
        .params
        .get(idx)
        .and_then(|p| p.as_int())
        .ok_or_else(|| {
            HintError::template(format!(
                "{} {} hint has no integer parameter #{idx}",
                parsed.concept,
                parsed.shape.as_str()
            ))
        })
}

pub(crate) fn parity_param(parsed: &ParsedHint, idx: usize) -> Result<Parity> {
    parsed
        .params
        .get(idx)
        .and_then(|p| p.as_parity())
        .ok_or_else(|| {
            HintError::template(format!(
                "{} {} hint has no parity parameter #{idx}",
                parsed.concept,
                parsed.shape.as_str()
            ))
        })
}

/// Compare a recomputed count against the one a hint states.
pub(crate) fn count_matches(actual: usize, stated: i64) -> bool {
    i64::try_from(actual).is_ok_and(|actual| actual == stated)
}

pub(crate) fn unsupported_shape(parsed: &ParsedHint) -> HintError {
    HintError::template(format!(
        "{} does not evaluate {} hints",
        parsed.concept,
        parsed.shape.as_str()
    ))
}
