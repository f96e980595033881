use serde::Serialize;
use tracing::trace;

use super::registry::{ShareDescriptor, ShareRegistry};
use super::schema::Schema;
use super::validation::FULL_SCORE;
use crate::error::{CompletenessError, Result};
use crate::fields::{FieldValue, Fields};

/// Per-field line of a [`CompletenessReport`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldReport {
    pub field: String,
    pub title: String,
    pub weight: f64,
    pub score: f64,
}

/// Snapshot of an object's completeness, field by field in registry order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletenessReport {
    pub total: f64,
    pub complete: bool,
    pub fields: Vec<FieldReport>,
}

/// Per-instance registry that fully replaces the type-level one while set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareOverride(Option<ShareRegistry>);

impl ShareOverride {
    pub fn set_shares<I>(&mut self, shares: I)
    where
        I: IntoIterator<Item = ShareDescriptor>,
    {
        self.0 = Some(shares.into_iter().collect());
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn get(&self) -> Option<&ShareRegistry> {
        self.0.as_ref()
    }
}

/// Completeness queries over a host object's fields.
///
/// Implementors provide the type-level [`Schema`] and, optionally, an
/// instance-level registry. Lookups go to the instance registry first and
/// fall back to the schema only when the instance has none.
pub trait Completeness: Fields {
    fn schema(&self) -> &Schema;

    fn share_override(&self) -> Option<&ShareRegistry> {
        None
    }

    fn effective_shares(&self) -> &ShareRegistry {
        self.share_override()
            .unwrap_or_else(|| self.schema().shares())
    }

    fn share(&self, field: &str) -> Result<&ShareDescriptor> {
        self.effective_shares()
            .get(field)
            .ok_or_else(|| CompletenessError::UnregisteredField {
                field: field.to_string(),
                owner: self.owner_name().to_string(),
            })
    }

    /// The field's weight if its predicate holds on the current value, else 0.
    fn completeness_of(&self, field: &str) -> Result<f64> {
        let share = self.share(field)?;
        Ok(evaluate(self, share))
    }

    fn completeness(&self) -> f64 {
        self.effective_shares()
            .iter()
            .fold(0.0, |total, share| total + evaluate(self, share))
    }

    fn is_complete(&self) -> bool {
        self.completeness() == FULL_SCORE
    }

    /// Registered fields currently scoring 0, in registry order.
    fn incomplete_fields(&self) -> Vec<&str> {
        self.effective_shares()
            .iter()
            .filter(|share| evaluate(self, share) == 0.0)
            .map(|share| share.field.as_str())
            .collect()
    }

    fn weight_of(&self, field: &str) -> Result<f64> {
        Ok(self.share(field)?.weight)
    }

    fn title_of(&self, field: &str) -> Result<String> {
        Ok(self.share(field)?.display_title())
    }

    /// Invoke a generated boolean accessor by name.
    fn accessor(&self, name: &str) -> Result<bool> {
        let field = self
            .schema()
            .accessor_field(name)
            .ok_or_else(|| CompletenessError::UnknownAccessor {
                name: name.to_string(),
            })?;
        Ok(self.completeness_of(field)? > 0.0)
    }

    fn completeness_report(&self) -> CompletenessReport {
        let fields: Vec<FieldReport> = self
            .effective_shares()
            .iter()
            .map(|share| FieldReport {
                field: share.field.clone(),
                title: share.display_title(),
                weight: share.weight,
                score: evaluate(self, share),
            })
            .collect();
        let total = fields.iter().fold(0.0, |total, f| total + f.score);

        CompletenessReport {
            total,
            complete: total == FULL_SCORE,
            fields,
        }
    }
}

/// Score one share against the host's current field value.
/// Missing fields, null values and inapplicable predicates all score 0.
fn evaluate<T: Completeness + ?Sized>(host: &T, share: &ShareDescriptor) -> f64 {
    let value = host.field(&share.field).unwrap_or_else(|| {
        trace!(field = %share.field, owner = host.owner_name(), "field not exposed by host, treating as null");
        FieldValue::Null
    });
    let predicate = share
        .predicate
        .as_ref()
        .unwrap_or_else(|| host.schema().default_predicate());

    match predicate.apply(&value) {
        Some(true) => share.weight,
        Some(false) => 0.0,
        None => {
            trace!(
                field = %share.field,
                predicate = predicate.name(),
                kind = value.kind(),
                "predicate not applicable, scoring 0"
            );
            0.0
        }
    }
}
