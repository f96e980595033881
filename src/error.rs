use thiserror::Error;

pub type Result<T, E = CompletenessError> = std::result::Result<T, E>;

/// Configuration errors surfaced by the completeness engine.
///
/// All of these point at a mistake in how shares were declared or queried.
/// Predicate application itself never produces an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletenessError {
    #[error("completeness share is not defined for '{field}' of {owner}")]
    UnregisteredField { field: String, owner: String },

    #[error("completeness shares must sum to 100, got {sum}")]
    InvalidWeightSum { sum: f64 },

    #[error("completeness share '{field}' has invalid weight {weight}: must be a non-negative number")]
    InvalidWeight { field: String, weight: f64 },

    #[error("cannot define accessor '{name}': a method with that name already exists")]
    AccessorNameCollision { name: String },

    #[error("no accessor named '{name}' has been defined")]
    UnknownAccessor { name: String },

    #[error("unknown predicate '{name}'")]
    UnknownPredicate { name: String },
}
