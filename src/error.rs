use thiserror::Error;

/// Configuration errors raised when rule, membership and centroid tables
/// don't line up.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FuzzyError {
    #[error("fuzzy set not found: {name}")]
    SetNotFound { name: String },

    #[error("no centroid registered for output set: {name}")]
    CentroidNotFound { name: String },

    #[error("fuzzy set defined by more than one input variable: {name}")]
    DuplicateSet { name: String },

    #[error("input given for a variable that is not registered")]
    UnknownVariable,
}

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;
