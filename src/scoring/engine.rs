use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

use super::domains::{DomainCatalog, DomainDefinition, DomainId};
use super::result::{rounded_percent, AssessmentResult, DomainResult};
use super::score::{Score, ScoreError, ScoreKey};

/// Holds the scores entered for one assessment and derives results on demand.
///
/// Unscored items count as 0 when aggregating. The last calculated result is
/// kept until the next `calculate()` or `reset()`; `is_stale()` reports
/// whether scores have changed since it was computed.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    catalog: DomainCatalog,
    scores: HashMap<ScoreKey, Score>,
    result: Option<AssessmentResult>,
    stale: bool,
}

impl ScoreCalculator {
    pub fn new(catalog: DomainCatalog) -> Self {
        Self {
            catalog,
            scores: HashMap::new(),
            result: None,
            stale: false,
        }
    }

    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// Store a score for one item, overwriting any previous value.
    ///
    /// Returns the previous score. Invalid keys and values outside 0..=4 are
    /// rejected and leave the calculator unchanged.
    pub fn set_score(&mut self, key: ScoreKey, value: i64) -> Result<Option<Score>, ScoreError> {
        self.check_key(key)?;
        let score = Score::new(value)?;
        let previous = self.scores.insert(key, score);
        if previous != Some(score) {
            self.mark_changed();
        }
        Ok(previous)
    }

    /// Same as `set_score`, resolving the domain by name
    pub fn set_score_by_name(
        &mut self,
        domain: &str,
        item: usize,
        value: i64,
    ) -> Result<Option<Score>, ScoreError> {
        let id = self
            .catalog
            .find(domain)
            .ok_or_else(|| ScoreError::UnknownDomain(domain.to_string()))?;
        self.set_score(ScoreKey::new(id, item), value)
    }

    /// Remove the score for one item so it counts as unscored again
    pub fn clear_score(&mut self, key: ScoreKey) -> Result<Option<Score>, ScoreError> {
        self.check_key(key)?;
        let previous = self.scores.remove(&key);
        if previous.is_some() {
            self.mark_changed();
        }
        Ok(previous)
    }

    pub fn score(&self, key: ScoreKey) -> Option<Score> {
        self.scores.get(&key).copied()
    }

    /// Number of items that have a score
    pub fn scored_count(&self) -> usize {
        self.scores.len()
    }

    pub fn item_count(&self) -> usize {
        self.catalog.item_count()
    }

    /// Sum every domain's items, compute percentages and store the result.
    pub fn calculate(&mut self) -> &AssessmentResult {
        let mut total_score = 0;
        let mut max_score = 0;
        let mut domain_results = Vec::with_capacity(self.catalog.len());

        for (id, domain) in self.catalog.iter() {
            let result = self.domain_result(id, domain);
            total_score += result.score;
            max_score += result.max_score;
            domain_results.push(result);
        }

        debug!(
            total_score,
            max_score,
            scored = self.scores.len(),
            "calculated assessment"
        );

        self.stale = false;
        self.result.insert(AssessmentResult {
            total_score,
            max_score,
            domain_results,
            calculated_at: Utc::now(),
        })
    }

    /// The result of the last `calculate()`, if any
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// True when scores changed after the stored result was calculated
    pub fn is_stale(&self) -> bool {
        self.result.is_some() && self.stale
    }

    /// Clear all scores and the stored result
    pub fn reset(&mut self) {
        debug!(cleared = self.scores.len(), "reset assessment");
        self.scores.clear();
        self.result = None;
        self.stale = false;
    }

    fn domain_result(&self, id: DomainId, domain: &DomainDefinition) -> DomainResult {
        let score: u32 = (0..domain.item_count())
            .map(|item| {
                self.score(ScoreKey::new(id, item))
                    .map_or(0, |s| s.value() as u32)
            })
            .sum();
        let max_score = domain.item_count() as u32 * Score::MAX.value() as u32;

        DomainResult {
            name: domain.name.clone(),
            score,
            max_score,
            percent: rounded_percent(score, max_score),
        }
    }

    fn check_key(&self, key: ScoreKey) -> Result<(), ScoreError> {
        let domain = self
            .catalog
            .get(key.domain)
            .ok_or(ScoreError::DomainOutOfRange(key.domain.0))?;
        if key.item >= domain.item_count() {
            return Err(ScoreError::ItemOutOfRange {
                domain: domain.name.clone(),
                item: key.item,
                item_count: domain.item_count(),
            });
        }
        Ok(())
    }

    fn mark_changed(&mut self) {
        if self.result.is_some() {
            self.stale = true;
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new(DomainCatalog::builtin())
    }
}
