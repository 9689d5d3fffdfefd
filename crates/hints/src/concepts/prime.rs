use super::{count_matches, int_param, unsupported_shape, Concept};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintParam, HintShape, ParsedHint};
use guess_numbers::{is_prime, prime_factor_count, RandomSource};

#[derive(Debug, Clone, Copy)]
pub struct PrimeNumberConcept {
    winning_number: i64,
}

impl PrimeNumberConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for PrimeNumberConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::PrimeNumber
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
        let n = self.winning_number;
        let mut hints = Vec::new();
        if is_prime(n) {
            hints.push(HintTemplates::render(self.kind(), HintShape::Main, &[])?);
        }
        hints.push(HintTemplates::render(
            self.kind(),
            HintShape::FactorCount,
            &[HintParam::try_from(prime_factor_count(n))?],
        )?);
        Ok(hints)
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => Ok(is_prime(guess)),
            HintShape::FactorCount => Ok(count_matches(
                prime_factor_count(guess),
                int_param(parsed, 0)?,
            )),
            HintShape::DigitCount => Err(unsupported_shape(parsed)),
        }
    }
}
