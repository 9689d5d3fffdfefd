use super::{int_param, unsupported_shape, Concept};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintParam, HintShape, ParsedHint};
use guess_numbers::{is_factor, RandomSource};

/// Largest multiplier offered: hints name `n, 2n, .., 5n`.
const MAX_MULTIPLIER: i64 = 5;

/// How many multiples a sampled generation reveals.
const SAMPLED_MULTIPLES: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct MultipleConcept {
    winning_number: i64,
}

impl MultipleConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }

    fn candidates(&self) -> Vec<i64> {
        (1..=MAX_MULTIPLIER)
            .filter_map(|k| self.winning_number.checked_mul(k))
            .collect()
    }
}

impl Concept for MultipleConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::Multiple
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        !matches!(self.winning_number, 0 | 1)
    }

    fn generate_hints(
        &self,
        generation: Generation,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        let candidates = self.candidates();
        let chosen: Vec<i64> = match generation {
            Generation::Exhaustive => candidates,
            Generation::Sampled => {
                let take = SAMPLED_MULTIPLES.min(candidates.len());
                let mut picks = rng.draw(0, candidates.len() as i64, take)?;
                picks.sort_unstable();
                let mut values: Vec<i64> = picks
                    .into_iter()
                    .filter_map(|idx| candidates.get(idx as usize).copied())
                    .collect();
                values.dedup();
                values
            }
        };

        chosen
            .into_iter()
            .map(|value| HintTemplates::render(self.kind(), HintShape::Main, &[HintParam::Int(value)]))
            .collect()
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => Ok(is_factor(int_param(parsed, 0)?, guess)),
            _ => Err(unsupported_shape(parsed)),
        }
    }
}
