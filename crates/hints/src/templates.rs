//! Hint phrasing.
//!
//! Each `(concept, shape)` pair owns exactly one template. The same parsed
//! template drives both rendering and the regex that reads parameters back out
//! of rendered text, so the two directions cannot drift apart.

use crate::error::{HintError, Result};
use crate::types::{ConceptKind, HintParam, HintShape, ParsedHint, Parity};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintTemplate {
    pub concept: ConceptKind,
    pub shape: HintShape,
    pub text: &'static str,
}

const fn template(concept: ConceptKind, shape: HintShape, text: &'static str) -> HintTemplate {
    HintTemplate {
        concept,
        shape,
        text,
    }
}

pub const HINT_TEMPLATES: &[HintTemplate] = &[
    template(
        ConceptKind::Factor,
        HintShape::Main,
        "{value} is a factor of the number.",
    ),
    template(
        ConceptKind::Factor,
        HintShape::FactorCount,
        "The number of factors it has is {count}.",
    ),
    template(
        ConceptKind::Factor,
        HintShape::DigitCount,
        "Exactly {count} of its digits are each a factor of the number.",
    ),
    template(
        ConceptKind::Multiple,
        HintShape::Main,
        "{value} is a multiple of the number.",
    ),
    template(
        ConceptKind::PrimeNumber,
        HintShape::Main,
        "The number is a prime number.",
    ),
    template(
        ConceptKind::PrimeNumber,
        HintShape::FactorCount,
        "Exactly {count} of its factors are each a prime number.",
    ),
    template(
        ConceptKind::EvenOdd,
        HintShape::Main,
        "The number is a {parity} number.",
    ),
    template(
        ConceptKind::EvenOdd,
        HintShape::DigitCount,
        "Exactly {count} of its digits are each a {parity} number.",
    ),
    template(
        ConceptKind::PerfectSquare,
        HintShape::Main,
        "The number is a perfect square.",
    ),
    template(
        ConceptKind::PerfectSquare,
        HintShape::DigitCount,
        "Exactly {count} of its digits are each a perfect square.",
    ),
    template(
        ConceptKind::PerfectCube,
        HintShape::Main,
        "The number is a perfect cube.",
    ),
    template(
        ConceptKind::PerfectCube,
        HintShape::DigitCount,
        "Exactly {count} of its digits are each a perfect cube.",
    ),
    template(
        ConceptKind::DigitSum,
        HintShape::Main,
        "The sum of its digits is {value}.",
    ),
    template(
        ConceptKind::DigitLength,
        HintShape::Main,
        "The number has {value} digits.",
    ),
];

const ALLOWED_PLACEHOLDERS: &str = "value, count, parity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Any integer, sign included
    Value,
    /// Non-negative integer
    Count,
    Parity,
}

impl Slot {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "value" => Some(Self::Value),
            "count" => Some(Self::Count),
            "parity" => Some(Self::Parity),
            _ => None,
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::Value => r"(-?\d+)",
            Self::Count => r"(\d+)",
            Self::Parity => r"(even|odd)",
        }
    }

    fn accepts(self, param: HintParam) -> bool {
        match (self, param) {
            (Self::Value, HintParam::Int(_)) => true,
            (Self::Count, HintParam::Int(value)) => value >= 0,
            (Self::Parity, HintParam::Parity(_)) => true,
            _ => false,
        }
    }

    fn read(self, raw: &str) -> Option<HintParam> {
        match self {
            Self::Value | Self::Count => raw.parse::<i64>().ok().map(HintParam::Int),
            Self::Parity => Parity::parse(raw).map(HintParam::Parity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

fn parse_segments(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some('{')) {
                    let _ = chars.next();
                    literal.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => {
                            return Err(HintError::template(format!(
                                "nested '{{' inside placeholder in {template:?}"
                            )));
                        }
                        Some(c) => name.push(c),
                        None => {
                            return Err(HintError::template(format!(
                                "unterminated '{{...}}' placeholder in {template:?}"
                            )));
                        }
                    }
                }

                let slot = Slot::parse(name.trim()).ok_or_else(|| {
                    HintError::template(format!(
                        "unsupported placeholder '{{{}}}'. Allowed: {ALLOWED_PLACEHOLDERS}",
                        name.trim()
                    ))
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(slot));
            }
            '}' => {
                if matches!(chars.peek(), Some('}')) {
                    let _ = chars.next();
                    literal.push('}');
                    continue;
                }
                return Err(HintError::template(format!(
                    "stray '}}' in {template:?}"
                )));
            }
            other => literal.push(other),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

#[derive(Debug)]
struct CompiledTemplate {
    template: &'static HintTemplate,
    segments: Vec<Segment>,
    slots: Vec<Slot>,
    pattern: Regex,
}

impl CompiledTemplate {
    fn compile(template: &'static HintTemplate) -> Result<Self> {
        let segments = parse_segments(template.text)?;

        let mut pattern = String::from("^");
        let mut slots = Vec::new();
        for segment in &segments {
            match segment {
                Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
                Segment::Slot(slot) => {
                    pattern.push_str(slot.pattern());
                    slots.push(*slot);
                }
            }
        }
        pattern.push('$');

        let pattern = Regex::new(&pattern)
            .map_err(|err| HintError::template(format!("{:?}: {err}", template.text)))?;

        Ok(Self {
            template,
            segments,
            slots,
            pattern,
        })
    }

    fn render(&self, params: &[HintParam]) -> Result<String> {
        if params.len() != self.slots.len() {
            return Err(HintError::template(format!(
                "{} {} hint takes {} parameter(s), got {}",
                self.template.concept,
                self.template.shape.as_str(),
                self.slots.len(),
                params.len()
            )));
        }

        let mut out = String::new();
        let mut params = params.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => {
                    let Some(&param) = params.next() else {
                        return Err(HintError::template("missing parameter"));
                    };
                    if !slot.accepts(param) {
                        return Err(HintError::template(format!(
                            "parameter {param:?} does not fit slot {slot:?} of {:?}",
                            self.template.text
                        )));
                    }
                    match param {
                        HintParam::Int(value) => out.push_str(&value.to_string()),
                        HintParam::Parity(parity) => out.push_str(parity.as_str()),
                    }
                }
            }
        }
        Ok(out)
    }

    fn extract(&self, text: &str) -> Option<Vec<HintParam>> {
        let captures = self.pattern.captures(text)?;
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| slot.read(captures.get(idx + 1)?.as_str()))
            .collect()
    }
}

static COMPILED: Lazy<std::result::Result<Vec<CompiledTemplate>, HintError>> =
    Lazy::new(|| HINT_TEMPLATES.iter().map(CompiledTemplate::compile).collect());

fn compiled() -> Result<&'static [CompiledTemplate]> {
    COMPILED
        .as_ref()
        .map(Vec::as_slice)
        .map_err(|err| err.clone())
}

fn find(concept: ConceptKind, shape: HintShape) -> Result<&'static CompiledTemplate> {
    compiled()?
        .iter()
        .find(|c| c.template.concept == concept && c.template.shape == shape)
        .ok_or_else(|| {
            HintError::template(format!("{concept} has no {} template", shape.as_str()))
        })
}

/// Lookup, rendering and inverse extraction over [`HINT_TEMPLATES`].
pub struct HintTemplates;

impl HintTemplates {
    #[must_use]
    pub fn lookup(concept: ConceptKind, shape: HintShape) -> Option<&'static HintTemplate> {
        HINT_TEMPLATES
            .iter()
            .find(|t| t.concept == concept && t.shape == shape)
    }

    /// Shapes the concept can produce, in table order.
    #[must_use]
    pub fn shapes(concept: ConceptKind) -> Vec<HintShape> {
        HINT_TEMPLATES
            .iter()
            .filter(|t| t.concept == concept)
            .map(|t| t.shape)
            .collect()
    }

    pub fn render(concept: ConceptKind, shape: HintShape, params: &[HintParam]) -> Result<String> {
        find(concept, shape)?.render(params)
    }

    /// Parameters of `text` if it was rendered from this `(concept, shape)`.
    pub fn extract(
        concept: ConceptKind,
        shape: HintShape,
        text: &str,
    ) -> Result<Option<Vec<HintParam>>> {
        Ok(find(concept, shape)?.extract(text))
    }

    /// Try every shape of `concept` against `text`.
    pub fn parse(concept: ConceptKind, text: &str) -> Result<Option<ParsedHint>> {
        for compiled in compiled()?
            .iter()
            .filter(|c| c.template.concept == concept)
        {
            if let Some(params) = compiled.extract(text) {
                return Ok(Some(ParsedHint {
                    concept,
                    shape: compiled.template.shape,
                    params,
                }));
            }
        }
        Ok(None)
    }

    /// Compile every template and reject duplicate `(concept, shape)` entries.
    pub fn validate() -> Result<()> {
        let compiled = compiled()?;
        for (idx, entry) in compiled.iter().enumerate() {
            let duplicate = compiled[idx + 1..].iter().any(|other| {
                other.template.concept == entry.template.concept
                    && other.template.shape == entry.template.shape
            });
            if duplicate {
                return Err(HintError::template(format!(
                    "duplicate {} {} template",
                    entry.template.concept,
                    entry.template.shape.as_str()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_is_valid() {
        HintTemplates::validate().unwrap();
    }

    #[test]
    fn renders_and_extracts_factor_count() {
        let text = HintTemplates::render(
            ConceptKind::Factor,
            HintShape::FactorCount,
            &[HintParam::Int(6)],
        )
        .unwrap();
        assert_eq!(text, "The number of factors it has is 6.");
        assert_eq!(
            HintTemplates::extract(ConceptKind::Factor, HintShape::FactorCount, &text).unwrap(),
            Some(vec![HintParam::Int(6)])
        );
    }

    #[test]
    fn literal_dots_are_not_wildcards() {
        assert_eq!(
            HintTemplates::extract(
                ConceptKind::DigitSum,
                HintShape::Main,
                "The sum of its digits is 7!"
            )
            .unwrap(),
            None
        );
    }

    #[test]
    fn render_rejects_wrong_arity_and_kind() {
        assert!(HintTemplates::render(
            ConceptKind::PrimeNumber,
            HintShape::Main,
            &[HintParam::Int(1)]
        )
        .is_err());
        assert!(HintTemplates::render(
            ConceptKind::EvenOdd,
            HintShape::Main,
            &[HintParam::Int(2)]
        )
        .is_err());
        assert!(HintTemplates::render(
            ConceptKind::Factor,
            HintShape::FactorCount,
            &[HintParam::Int(-1)]
        )
        .is_err());
    }

    #[test]
    fn missing_shape_is_an_error() {
        assert!(HintTemplates::render(ConceptKind::Multiple, HintShape::DigitCount, &[]).is_err());
        assert!(HintTemplates::lookup(ConceptKind::DigitLength, HintShape::FactorCount).is_none());
    }

    #[test]
    fn parse_reports_shape() {
        let parsed = HintTemplates::parse(
            ConceptKind::EvenOdd,
            "Exactly 2 of its digits are each a odd number.",
        )
        .unwrap()
        .unwrap();
        assert_eq!(parsed.shape, HintShape::DigitCount);
        assert_eq!(
            parsed.params,
            vec![HintParam::Int(2), HintParam::Parity(Parity::Odd)]
        );
    }

    #[test]
    fn segment_parser_handles_escapes_and_errors() {
        assert_eq!(
            parse_segments("{{x}} {count}").unwrap(),
            vec![
                Segment::Literal("{x} ".to_string()),
                Segment::Slot(Slot::Count)
            ]
        );
        assert!(parse_segments("{count").is_err());
        assert!(parse_segments("count}").is_err());
        assert!(parse_segments("{{count}").is_err());
        assert!(parse_segments("{unknown}").is_err());
    }
}
