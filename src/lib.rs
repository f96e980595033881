//! Weighted completeness scoring.
//!
//! A host type declares, once, how much each of its fields contributes to a
//! 0-100 completeness score and which predicate decides whether the field is
//! filled in. The [`Completeness`] trait then derives the total, pass/fail
//! status, the list of missing fields and any generated boolean accessors.
//!
//! ```
//! use completeness::{Completeness, FieldValue, Fields, Schema, ShareDescriptor};
//!
//! struct Contact {
//!     email: Option<String>,
//!     phone: Option<String>,
//! }
//!
//! impl Fields for Contact {
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         match name {
//!             "email" => Some(self.email.as_ref().into()),
//!             "phone" => Some(self.phone.as_ref().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Completeness for Contact {
//!     fn schema(&self) -> &Schema {
//!         static SCHEMA: std::sync::OnceLock<Schema> = std::sync::OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             Schema::from_shares(vec![
//!                 ShareDescriptor::new("email", 60.0),
//!                 ShareDescriptor::new("phone", 40.0),
//!             ])
//!         })
//!     }
//! }
//!
//! let contact = Contact { email: Some("me@mail.net".into()), phone: None };
//! assert_eq!(contact.completeness(), 60.0);
//! assert_eq!(contact.incomplete_fields(), vec!["phone"]);
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod shares;

pub use error::{CompletenessError, Result};
pub use fields::{FieldValue, Fields};
pub use shares::{
    humanize, validate_shares, Completeness, CompletenessReport, DeclareOptions, FieldReport,
    Predicate, PredicateTable, Schema, ShareDescriptor, ShareOverride, ShareRegistry,
};
