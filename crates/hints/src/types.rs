use crate::error::HintError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The mathematical property a hint talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    Factor,
    Multiple,
    PrimeNumber,
    EvenOdd,
    PerfectSquare,
    PerfectCube,
    DigitSum,
    DigitLength,
}

impl ConceptKind {
    /// Every concept in generation order.
    pub const ALL: [Self; 8] = [
        Self::Factor,
        Self::Multiple,
        Self::PrimeNumber,
        Self::EvenOdd,
        Self::PerfectSquare,
        Self::PerfectCube,
        Self::DigitSum,
        Self::DigitLength,
    ];

    /// Stable identifier, e.g. `"prime number"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Factor => "factor",
            Self::Multiple => "multiple",
            Self::PrimeNumber => "prime number",
            Self::EvenOdd => "even odd",
            Self::PerfectSquare => "perfect square",
            Self::PerfectCube => "perfect cube",
            Self::DigitSum => "digit sum",
            Self::DigitLength => "digit length",
        }
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural kind of a hint. Each `(concept, shape)` pair has one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintShape {
    /// Plain statement about the number itself
    Main,
    /// How many of the number's factors satisfy the concept
    FactorCount,
    /// How many of the number's digits satisfy the concept
    DigitCount,
}

impl HintShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::FactorCount => "factor_count",
            Self::DigitCount => "digit_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(n: i64) -> Self {
        if n.rem_euclid(2) == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }

    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "even" => Some(Self::Even),
            "odd" => Some(Self::Odd),
            _ => None,
        }
    }
}

/// A value filling one template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintParam {
    Int(i64),
    Parity(Parity),
}

impl HintParam {
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Parity(_) => None,
        }
    }

    #[must_use]
    pub const fn as_parity(self) -> Option<Parity> {
        match self {
            Self::Parity(parity) => Some(parity),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for HintParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl TryFrom<u64> for HintParam {
    type Error = HintError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| HintError::template(format!("{value} does not fit a hint parameter")))
    }
}

impl TryFrom<usize> for HintParam {
    type Error = HintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| HintError::template(format!("{value} does not fit a hint parameter")))
    }
}

impl From<Parity> for HintParam {
    fn from(value: Parity) -> Self {
        Self::Parity(value)
    }
}

/// Structured meaning recovered from a rendered hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHint {
    pub concept: ConceptKind,
    pub shape: HintShape,
    pub params: Vec<HintParam>,
}

/// Whether a guess keeps a hint's assertion true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Good,
    Bad,
}

impl Feedback {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }
}

impl From<bool> for Feedback {
    fn from(holds: bool) -> Self {
        if holds {
            Self::Good
        } else {
            Self::Bad
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the winning number lies relative to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Greater,
    Less,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::Less => "less",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many hints a concept emits when it has more candidates than it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generation {
    /// Sample a subset where a concept samples, and drop duplicate texts
    #[default]
    Sampled,
    /// Every candidate hint, no de-duplication
    Exhaustive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_convert_without_truncation() {
        assert_eq!(HintParam::try_from(171_u64), Ok(HintParam::Int(171)));
        assert_eq!(HintParam::try_from(6_usize), Ok(HintParam::Int(6)));
        assert!(matches!(
            HintParam::try_from(u64::MAX),
            Err(HintError::Template(_))
        ));
    }
}
