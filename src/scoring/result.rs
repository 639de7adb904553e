use chrono::{DateTime, Utc};
use serde::Serialize;

/// Score for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub name: String,
    pub score: u32,
    pub max_score: u32, // item_count * 4
    pub percent: u32,   // 0-100, rounded half-up
}

/// Aggregated totals computed from the current scores.
///
/// `domain_results` keeps catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub max_score: u32,
    pub domain_results: Vec<DomainResult>,
    pub calculated_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Overall progress as a rounded percentage of the maximum score
    pub fn overall_percent(&self) -> u32 {
        rounded_percent(self.total_score, self.max_score)
    }

    /// Look up a domain's result by name (case-insensitive)
    pub fn domain(&self, name: &str) -> Option<&DomainResult> {
        self.domain_results
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// `round(score / max * 100)` with half-up rounding, in integer arithmetic.
/// A zero maximum yields 0.
pub fn rounded_percent(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let score = score as u64;
    let max = max as u64;
    ((score * 200 + max) / (max * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_percent_exact() {
        assert_eq!(rounded_percent(6, 12), 50);
        assert_eq!(rounded_percent(12, 12), 100);
        assert_eq!(rounded_percent(0, 12), 0);
    }

    #[test]
    fn test_rounded_percent_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(rounded_percent(1, 8), 13);
        // 1/12 = 8.33%
        assert_eq!(rounded_percent(1, 12), 8);
        // 2/12 = 16.67%
        assert_eq!(rounded_percent(2, 12), 17);
        // 7/60 = 11.67%
        assert_eq!(rounded_percent(7, 60), 12);
    }

    #[test]
    fn test_rounded_percent_zero_max() {
        assert_eq!(rounded_percent(0, 0), 0);
    }

    #[test]
    fn test_overall_percent_and_lookup() {
        let result = AssessmentResult {
            total_score: 30,
            max_score: 60,
            domain_results: vec![DomainResult {
                name: "Motor Skills".to_string(),
                score: 6,
                max_score: 12,
                percent: 50,
            }],
            calculated_at: Utc::now(),
        };
        assert_eq!(result.overall_percent(), 50);
        assert_eq!(result.domain("motor skills").unwrap().score, 6);
        assert!(result.domain("Play").is_none());
    }
}
