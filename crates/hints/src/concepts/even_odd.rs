use super::{
    count_digits, count_matches, digit_count_hint, int_param, parity_param, unsupported_shape, Concept,
};
use crate::error::Result;
use crate::templates::HintTemplates;
use crate::types::{ConceptKind, Generation, HintParam, HintShape, ParsedHint, Parity};
use guess_numbers::RandomSource;

/// Parity hints only make sense for small numbers.
const PARITY_LIMIT: u64 = 100;

/// Article fixes applied after rendering. Both parity words start with a vowel.
const ARTICLE_FIXES: [(&str, &str); 2] = [(" a even ", " an even "), (" a odd ", " an odd ")];

fn fix_articles(text: &str) -> String {
    ARTICLE_FIXES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn unfix_articles(text: &str) -> String {
    ARTICLE_FIXES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(to, from))
}

#[derive(Debug, Clone, Copy)]
pub struct EvenOddConcept {
    winning_number: i64,
}

impl EvenOddConcept {
    #[must_use]
    pub const fn new(winning_number: i64) -> Self {
        Self { winning_number }
    }
}

impl Concept for EvenOddConcept {
    fn kind(&self) -> ConceptKind {
        ConceptKind::EvenOdd
    }

    fn winning_number(&self) -> i64 {
        self.winning_number
    }

    fn include_concept(&self) -> bool {
        self.winning_number.unsigned_abs() < PARITY_LIMIT
    }

    fn generate_hints(
        &self,
        _generation: Generation,
        _rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>> {
        let n = self.winning_number;
        let parity = Parity::of(n);

        let mut hints = vec![HintTemplates::render(
            self.kind(),
            HintShape::Main,
            &[HintParam::Parity(parity)],
        )?];
        if let Some(hint) = digit_count_hint(self.kind(), n, &[HintParam::Parity(parity)], |d| {
            Parity::of(i64::from(d)) == parity
        })? {
            hints.push(hint);
        }

        Ok(hints.iter().map(|hint| fix_articles(hint)).collect())
    }

    /// Only the corrected phrasing is ours; "a even" is never rendered.
    fn parse_hint(&self, hint: &str) -> Result<Option<ParsedHint>> {
        if ARTICLE_FIXES.iter().any(|(from, _)| hint.contains(from)) {
            return Ok(None);
        }
        HintTemplates::parse(self.kind(), &unfix_articles(hint))
    }

    fn holds_for(&self, guess: i64, parsed: &ParsedHint) -> Result<bool> {
        match parsed.shape {
            HintShape::Main => Ok(Parity::of(guess) == parity_param(parsed, 0)?),
            HintShape::DigitCount => {
                let parity = parity_param(parsed, 1)?;
                let matching = count_digits(guess, |d| Parity::of(i64::from(d)) == parity);
                Ok(count_matches(matching, int_param(parsed, 0)?))
            }
            HintShape::FactorCount => Err(unsupported_shape(parsed)),
        }
    }
}
