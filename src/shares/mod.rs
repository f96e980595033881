pub mod engine;
pub mod predicate;
pub mod registry;
pub mod schema;
pub mod validation;

pub use engine::{Completeness, CompletenessReport, FieldReport, ShareOverride};
pub use predicate::{Predicate, PredicateTable};
pub use registry::{humanize, ShareDescriptor, ShareRegistry};
pub use schema::{DeclareOptions, Schema, ENGINE_METHODS};
pub use validation::{validate_shares, FULL_SCORE};
