pub mod domains;
pub mod engine;
pub mod result;
pub mod score;
pub mod validation;

pub use domains::{DomainCatalog, DomainDefinition, DomainId};
pub use engine::ScoreCalculator;
pub use result::{rounded_percent, AssessmentResult, DomainResult};
pub use score::{Score, ScoreError, ScoreKey};
pub use validation::validate_catalog;
