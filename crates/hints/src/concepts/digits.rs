use super::{count_matches, int_param, unsupported_shape, Concept};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintParam, HintShape, ParsedHint};
use guess_numbers::{digit_length, digit_sum, RandomSource};

/// Digit sums of single-digit numbers give the answer away.
const DIGIT_SUM_MIN: u64 = 10;
const DIGIT_LENGTH_MIN: u64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct DigitSumConcept {
    winning_number: i64,
}

impl DigitSumConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for DigitSumConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::DigitSum
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        self.winning_number.unsigned_abs() >= DIGIT_SUM_MIN
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        Ok(vec![HintTemplates::render(
            self.kind(),
            HintShape::Main,
            &[HintParam::try_from(digit_sum(self.winning_number))?],
        )?])
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => {
                let stated = int_param(parsed, 0)?;
                Ok(i64::try_from(digit_sum(guess)).is_ok_and(|sum| sum == stated))
            }
            _ => Err(unsupported_shape(parsed)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DigitLengthConcept {
    winning_number: i64,
}

impl DigitLengthConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for DigitLengthConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::DigitLength
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        self.winning_number.unsigned_abs() >= DIGIT_LENGTH_MIN
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        Ok(vec![HintTemplates::render(
            self.kind(),
            HintShape::Main,
            &[HintParam::try_from(digit_length(self.winning_number))?],
        )?])
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => Ok(count_matches(digit_length(guess), int_param(parsed, 0)?)),
            _ => Err(unsupported_shape(parsed)),
        }
    }
}
