use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::domains::DomainId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score {0} is out of range (allowed: 0-4)")]
    OutOfRange(i64),

    #[error("unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("domain #{} does not exist", .0 + 1)]
    DomainOutOfRange(usize),

    #[error("item #{} does not exist in '{domain}' ({item_count} items)", .item + 1)]
    ItemOutOfRange {
        domain: String,
        item: usize,
        item_count: usize,
    },
}

/// Mastery level for a single checklist item, always within 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(4);

    pub fn new(value: i64) -> Result<Self, ScoreError> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next score up, saturating at 4
    pub fn increment(self) -> Self {
        Score((self.0 + 1).min(Self::MAX.0))
    }

    /// Next score down, saturating at 0
    pub fn decrement(self) -> Self {
        Score(self.0.saturating_sub(1))
    }

    /// Every allowed score, lowest first
    pub fn all() -> impl Iterator<Item = Score> {
        (Self::MIN.0..=Self::MAX.0).map(Score)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one checklist item: a domain and the item's 0-based position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScoreKey {
    pub domain: DomainId,
    pub item: usize,
}

impl ScoreKey {
    pub fn new(domain: DomainId, item: usize) -> Self {
        Self { domain, item }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accepts_allowed_values() {
        for v in 0..=4 {
            assert_eq!(Score::new(v).unwrap().value() as i64, v);
        }
    }

    #[test]
    fn test_score_rejects_out_of_range() {
        assert_eq!(Score::new(5), Err(ScoreError::OutOfRange(5)));
        assert_eq!(Score::new(-1), Err(ScoreError::OutOfRange(-1)));
    }

    #[test]
    fn test_increment_and_decrement_saturate() {
        assert_eq!(Score::MAX.increment(), Score::MAX);
        assert_eq!(Score::MIN.decrement(), Score::MIN);
        assert_eq!(Score::new(2).unwrap().increment().value(), 3);
        assert_eq!(Score::new(2).unwrap().decrement().value(), 1);
    }

    #[test]
    fn test_all_lists_five_scores() {
        let all: Vec<u8> = Score::all().map(Score::value).collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_score_serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Score>("3").unwrap().value(), 3);
        assert!(serde_json::from_str::<Score>("7").is_err());
        assert_eq!(serde_json::to_string(&Score::MAX).unwrap(), "4");
    }

    #[test]
    fn test_item_out_of_range_message() {
        let err = ScoreError::ItemOutOfRange {
            domain: "Motor Skills".to_string(),
            item: 3,
            item_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "item #4 does not exist in 'Motor Skills' (3 items)"
        );
    }
}
