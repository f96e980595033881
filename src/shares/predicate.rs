use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CompletenessError, Result};
use crate::fields::FieldValue;

type PredicateFn = dyn Fn(&FieldValue<'_>) -> bool + Send + Sync;

/// Decides whether a field counts as filled in.
#[derive(Clone, Default)]
pub enum Predicate {
    /// Not null, not whitespace-only text, not an empty collection.
    #[default]
    NonBlank,
    /// A list or map with at least one entry. Inapplicable to anything else.
    NonEmpty,
    Custom(String, Arc<PredicateFn>),
}

impl Predicate {
    pub fn custom<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
    {
        Predicate::Custom(name.into(), Arc::new(f))
    }

    /// Resolve a built-in predicate by name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "present?" | "non_blank" => Ok(Predicate::NonBlank),
            "any?" | "non_empty" => Ok(Predicate::NonEmpty),
            other => Err(CompletenessError::UnknownPredicate {
                name: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Predicate::NonBlank => "present?",
            Predicate::NonEmpty => "any?",
            Predicate::Custom(name, _) => name,
        }
    }

    /// Apply to a value. `None` means the predicate does not apply to this kind of value.
    pub fn apply(&self, value: &FieldValue<'_>) -> Option<bool> {
        match (self, value) {
            (_, FieldValue::Null) => None,
            (Predicate::NonBlank, FieldValue::Text(s)) => Some(!s.trim().is_empty()),
            (Predicate::NonBlank, FieldValue::Bool(b)) => Some(*b),
            (Predicate::NonBlank, FieldValue::Int(_) | FieldValue::Float(_)) => Some(true),
            (
                Predicate::NonBlank | Predicate::NonEmpty,
                FieldValue::List(len) | FieldValue::Map(len),
            ) => Some(*len > 0),
            (Predicate::NonEmpty, _) => None,
            (Predicate::Custom(_, f), value) => Some(f(value)),
        }
    }

    /// Like [`Predicate::apply`], with inapplicable treated as false.
    pub fn holds(&self, value: &FieldValue<'_>) -> bool {
        self.apply(value).unwrap_or(false)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::NonBlank => f.write_str("NonBlank"),
            Predicate::NonEmpty => f.write_str("NonEmpty"),
            Predicate::Custom(name, _) => f.debug_tuple("Custom").field(name).finish(),
        }
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Predicate::NonBlank, Predicate::NonBlank) => true,
            (Predicate::NonEmpty, Predicate::NonEmpty) => true,
            (Predicate::Custom(a, f), Predicate::Custom(b, g)) => a == b && Arc::ptr_eq(f, g),
            _ => false,
        }
    }
}

/// Name -> predicate lookup used when shares are declared by name.
///
/// Starts with the built-ins; custom predicates can be registered on top and
/// shadow a built-in of the same name.
#[derive(Debug, Clone, Default)]
pub struct PredicateTable {
    custom: HashMap<String, Predicate>,
}

impl PredicateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        self.custom
            .insert(name.clone(), Predicate::custom(name, f));
        self
    }

    pub fn resolve(&self, name: &str) -> Result<Predicate> {
        match self.custom.get(name.trim()) {
            Some(predicate) => Ok(predicate.clone()),
            None => Predicate::parse(name),
        }
    }
}
