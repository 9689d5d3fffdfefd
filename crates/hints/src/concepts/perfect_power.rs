use super::{count_digits, count_matches, digit_count_hint, int_param, unsupported_shape, Concept};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintShape, ParsedHint};
use guess_numbers::{is_perfect_cube, is_perfect_square, RandomSource};

/// Main hint when `n` has the property, plus a digit-count hint.
fn perfect_power_hints(kind: ConceptKind, n: i64, is_power: fn(i64) -> bool) -> Result<Vec<String>> {
    let mut hints = Vec::new();
    if is_power(n) {
        hints.push(HintTemplates::render(kind, HintShape::Main, &[])?);
    }
    if let Some(hint) = digit_count_hint(kind, n, &[], |d| is_power(i64::from(d)))? {
        hints.push(hint);
    }
    Ok(hints)
}

fn perfect_power_holds(guess: i64, parsed: &ParsedHint, is_power: fn(i64) -> bool) -> Result<bool> {
    match parsed.shape {
        HintShape::Main => Ok(is_power(guess)),
        HintShape::DigitCount => {
            let matching = count_digits(guess, |d| is_power(i64::from(d)));
            Ok(count_matches(matching, int_param(parsed, 0)?))
        }
        HintShape::FactorCount => Err(unsupported_shape(parsed)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PerfectSquareConcept {
    winning_number: i64,
}

impl PerfectSquareConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for PerfectSquareConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::PerfectSquare
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        self.winning_number >= 0
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        perfect_power_hints(self.kind(), self.winning_number, is_perfect_square)
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        perfect_power_holds(guess, parsed, is_perfect_square)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PerfectCubeConcept {
    winning_number: i64,
}

impl PerfectCubeConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for PerfectCubeConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::PerfectCube
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        true
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        perfect_power_hints(self.kind(), self.winning_number, is_perfect_cube)
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        perfect_power_holds(guess, parsed, is_perfect_cube)
    }
}
