use crate::concepts::{all_concepts, Concept};
use crate::error::{HintError, Result};
use crate::types::{Direction, Feedback, Generation, ParsedHint};
use guess_numbers::RandomSource;
use std::collections::HashSet;

/// Every concept bound to one winning number, in fixed generation order.
pub struct ConceptManager {
    winning_number: i64,
    concepts: Vec<Box<dyn Concept>>,
}

impl ConceptManager {
    #[must_use]
    pub fn new(winning_number: i64) -> Self {
        Self {
            winning_number,
            concepts: all_concepts(winning_number),
        }
    }

    #[must_use]
    pub const fn winning_number(&self) -> i64 {
        self.winning_number
    }

    pub fn concepts(&self) -> impl Iterator<Item = &dyn Concept> {
        self.concepts.iter().map(|c| &**c)
    }

    /// Concatenated hints of every applicable concept.
    ///
    /// [`Generation::Sampled`] lets sampling concepts pick a subset and drops
    /// repeated texts; [`Generation::Exhaustive`] keeps every candidate.
    pub fn generate_hints(
        &self,
        generation: Generation,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        let mut hints = Vec::new();
        for concept in self.concepts.iter().filter(|c| c.include_concept()) {
            let generated = concept.generate_hints(generation, rng)?;
            log::debug!("{} produced {} hint(s)", concept.name(), generated.len());
            hints.extend(generated);
        }

        if generation == Generation::Sampled {
            let mut seen = HashSet::new();
            hints.retain(|hint| seen.insert(hint.clone()));
        }
        Ok(hints)
    }

    /// Attribute `hint` to the concept whose templates match it.
    pub fn parse_hint(&self, hint: &str) -> Result<(&dyn Concept, ParsedHint)> {
        for concept in &self.concepts {
            if let Some(parsed) = concept.parse_hint(hint)? {
                return Ok((&**concept, parsed));
            }
        }
        Err(HintError::unrecognized(hint))
    }

    pub fn evaluate_guess(&self, guess: i64, hint: &str) -> Result<Feedback> {
        let (concept, _) = self.parse_hint(hint)?;
        concept.evaluate_guess(guess, hint)
    }

    /// Fallback once the hint pool is exhausted: where the winning number lies.
    ///
    /// Only meaningful for a wrong guess; `guess == winning_number` yields `Less`.
    #[must_use]
    pub const fn check_greater_or_less(guess: i64, winning_number: i64) -> Direction {
        if winning_number > guess {
            Direction::Greater
        } else {
            Direction::Less
        }
    }
}

impl std::fmt::Debug for ConceptManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptManager")
            .field(
                "concepts",
                &self.concepts.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
