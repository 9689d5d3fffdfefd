use super::{count_digits, count_matches, digit_count_hint, int_param, Concept};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintParam, HintShape, ParsedHint};
use guess_numbers::{factor_count, factors, is_factor, RandomSource};

/// Divisors of the winning number.
#[derive(Debug, Clone, Copy)]
pub struct FactorConcept {
    winning_number: i64,
}

impl FactorConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }

    /// Factors other than 1 and the number itself.
    fn interior_factors(&self) -> Vec<i64> {
        let list = factors(self.winning_number);
        if list.len() <= 2 {
            return Vec::new();
        }
        list[1..list.len() - 1]
            .iter()
            .filter_map(|&f| i64::try_from(f).ok())
            .collect()
    }
}

impl Concept for FactorConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::Factor
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        self.winning_number == 1 || factor_count(self.winning_number) > 2
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        let n = self.winning_number;
        let mut hints = Vec::new();

        for factor in self.interior_factors() {
            hints.push(HintTemplates::render(
                self.kind(),
                HintShape::Main,
                &[HintParam::Int(factor)],
            )?);
        }

        hints.push(HintTemplates::render(
            self.kind(),
            HintShape::FactorCount,
            &[HintParam::try_from(factor_count(n))?],
        )?);

        if let Some(hint) = digit_count_hint(self.kind(), n, &[], |d| is_factor(n, i64::from(d)))? {
            hints.push(hint);
        }

        Ok(hints)
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => Ok(is_factor(guess, int_param(parsed, 0)?)),
            HintShape::FactorCount => Ok(count_matches(factor_count(guess), int_param(parsed, 0)?)),
            HintShape::DigitCount => {
                let matching = count_digits(guess, |d| is_factor(guess, i64::from(d)));
                Ok(count_matches(matching, int_param(parsed, 0)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Feedback;
    use guess_numbers::SeededRandom;
    use pretty_assertions::assert_eq;

    fn hints_for(n: i64) -> Vec<String> {
        FactorConcept::new(n)
            .generate_hints(Generation::Sampled, &mut SeededRandom::new(0))
            .unwrap()
    }

    #[test]
    fn twelve_has_interior_count_and_digit_hints() {
        assert_eq!(
            hints_for(12),
            vec![
                "2 is a factor of the number.",
                "3 is a factor of the number.",
                "4 is a factor of the number.",
                "6 is a factor of the number.",
                "The number of factors it has is 6.",
                "Exactly 2 of its digits are each a factor of the number.",
            ]
        );
    }

    #[test]
    fn applicability() {
        assert!(FactorConcept::new(1).include_concept());
        assert!(FactorConcept::new(12).include_concept());
        assert!(!FactorConcept::new(0).include_concept());
        assert!(!FactorConcept::new(7).include_concept());
        assert_eq!(hints_for(1), vec!["The number of factors it has is 1."]);
    }

    #[test]
    fn count_hint_compares_factor_totals() {
        let concept = FactorConcept::new(12);
        let hint = "The number of factors it has is 6.";
        assert_eq!(concept.evaluate_guess(12, hint).unwrap(), Feedback::Good);
        assert_eq!(concept.evaluate_guess(24, hint).unwrap(), Feedback::Bad);
        assert_eq!(concept.evaluate_guess(18, hint).unwrap(), Feedback::Good);
        assert_eq!(concept.evaluate_guess(0, hint).unwrap(), Feedback::Bad);
    }

    #[test]
    fn main_hint_checks_divisibility() {
        let concept = FactorConcept::new(12);
        let hint = "4 is a factor of the number.";
        assert_eq!(concept.evaluate_guess(20, hint).unwrap(), Feedback::Good);
        assert_eq!(concept.evaluate_guess(0, hint).unwrap(), Feedback::Good);
        assert_eq!(concept.evaluate_guess(10, hint).unwrap(), Feedback::Bad);
    }

    #[test]
    fn digit_hint_recomputes_on_the_guess() {
        let concept = FactorConcept::new(12);
        let hint = "Exactly 2 of its digits are each a factor of the number.";
        // 15: 1 and 5 both divide 15
        assert_eq!(concept.evaluate_guess(15, hint).unwrap(), Feedback::Good);
        // 13: only 1 divides 13
        assert_eq!(concept.evaluate_guess(13, hint).unwrap(), Feedback::Bad);
        // 10: zero never divides
        assert_eq!(concept.evaluate_guess(10, hint).unwrap(), Feedback::Bad);
    }
}
