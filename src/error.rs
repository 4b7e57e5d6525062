use thiserror::Error;

/// Simplified `Result` using [`RulesError`](crate::RulesError) as error type
pub type Result<T> = std::result::Result<T, RulesError>;

/// Error variants from hyper-parameter construction or rule induction
#[derive(Error, Debug, Clone)]
pub enum RulesError {
    /// The rule budget has to allow at least one rule
    #[error("maximal number of rules should be positive, but was {0}")]
    InvalidMaxRules(usize),
    /// Only rules of order one and two are generated
    #[error("maximal rule order should be 1 or 2, but was {0}")]
    InvalidMaxOrder(usize),
    #[error("dataset has observations but no feature columns")]
    NoFeatures,
    #[error("records have {records} rows but there are {targets} decision labels")]
    MismatchedShapes { records: usize, targets: usize },
    #[error(transparent)]
    BaseCrate(#[from] linfa::error::Error),
}
