//! Hint lifecycle over one game.
//!
//! `pool` holds every hint not yet shown and is always `relevant ∪ redundant`.
//! Before each pick, hints the latest guess would reproduce word for word are
//! demoted from `relevant` to `redundant`: showing them tells the player
//! nothing their guess did not already.

use crate::error::{HintError, Result};
use crate::manager::ConceptManager;
use crate::types::Generation;
use guess_numbers::RandomSource;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintPool {
    pool: Vec<String>,
    relevant: Vec<String>,
    redundant: Vec<String>,
    given: Vec<String>,
}

impl HintPool {
    #[must_use]
    pub fn new(all_hints: Vec<String>) -> Self {
        let mut pool = Self::default();
        pool.initialize(all_hints);
        pool
    }

    /// Reset to `pool = relevant = all_hints`. Repeated texts are kept once.
    pub fn initialize(&mut self, all_hints: Vec<String>) {
        let mut seen = HashSet::new();
        let mut hints = all_hints;
        hints.retain(|hint| seen.insert(hint.clone()));

        self.relevant = hints.clone();
        self.pool = hints;
        self.redundant.clear();
        self.given.clear();
    }

    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn relevant(&self) -> &[String] {
        &self.relevant
    }

    #[must_use]
    pub fn redundant(&self) -> &[String] {
        &self.redundant
    }

    /// Hints already shown, oldest first.
    #[must_use]
    pub fn given(&self) -> &[String] {
        &self.given
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Move every relevant hint contained in `implied` to `redundant`.
    pub fn demote_implied(&mut self, implied: &HashSet<String>) -> usize {
        let (demoted, kept): (Vec<String>, Vec<String>) = std::mem::take(&mut self.relevant)
            .into_iter()
            .partition(|hint| implied.contains(hint));
        self.relevant = kept;
        let count = demoted.len();
        self.redundant.extend(demoted);
        count
    }

    /// Pick the next hint to show after `guess`, or `None` once the pool is empty.
    ///
    /// Hints are drawn uniformly from `relevant`, falling back to `redundant`.
    pub fn select_next_hint(
        &mut self,
        guess: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<String>> {
        if self.pool.is_empty() {
            return Ok(None);
        }
        self.check_invariants()?;

        let implied: HashSet<String> = ConceptManager::new(guess)
            .generate_hints(Generation::Exhaustive, rng)?
            .into_iter()
            .collect();
        let demoted = self.demote_implied(&implied);
        log::debug!(
            "guess {guess} implies {demoted} hint(s); {} relevant, {} redundant",
            self.relevant.len(),
            self.redundant.len()
        );

        let source = if !self.relevant.is_empty() {
            &mut self.relevant
        } else if !self.redundant.is_empty() {
            &mut self.redundant
        } else {
            log::warn!("hint pool holds {} hint(s) outside relevant/redundant", self.pool.len());
            return Err(HintError::consistency(format!(
                "pool has {} hint(s) but relevant and redundant are empty",
                self.pool.len()
            )));
        };

        let idx = rng.pick_index(source.len())?;
        let hint = source.remove(idx);

        let Some(pos) = self.pool.iter().position(|h| *h == hint) else {
            return Err(HintError::consistency(format!(
                "selected hint {hint:?} is missing from the pool"
            )));
        };
        self.pool.remove(pos);
        self.given.push(hint.clone());
        Ok(Some(hint))
    }

    /// Verify `pool == relevant ∪ redundant` (as multisets) and that nothing
    /// shown is still pending.
    pub fn check_invariants(&self) -> Result<()> {
        if counts(&self.pool) != counts(self.relevant.iter().chain(&self.redundant)) {
            log::warn!("hint pool diverged from relevant/redundant split");
            return Err(HintError::consistency(format!(
                "pool ({}) != relevant ({}) + redundant ({})",
                self.pool.len(),
                self.relevant.len(),
                self.redundant.len()
            )));
        }

        let mut shown = HashSet::new();
        for hint in &self.given {
            if !shown.insert(hint) || self.pool.contains(hint) {
                return Err(HintError::consistency(format!(
                    "hint {hint:?} is given twice or still pending"
                )));
            }
        }
        Ok(())
    }
}

fn counts<'a>(hints: impl IntoIterator<Item = &'a String>) -> HashMap<&'a str, usize> {
    let mut out = HashMap::new();
    for hint in hints {
        *out.entry(hint.as_str()).or_insert(0) += 1;
    }
    out
}
