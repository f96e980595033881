use tracing::debug;

use super::predicate::Predicate;
use super::registry::{ShareDescriptor, ShareRegistry};
use super::validation::validate_shares;
use crate::error::{CompletenessError, Result};

/// Operation names every completeness host already answers to.
/// Generated accessors may not reuse them.
pub const ENGINE_METHODS: &[&str] = &[
    "accessor",
    "completeness",
    "completeness_of",
    "completeness_report",
    "effective_shares",
    "field",
    "incomplete_fields",
    "is_complete",
    "owner_name",
    "schema",
    "share",
    "share_override",
    "title_of",
    "weight_of",
];

/// Options for [`Schema::declare`].
#[derive(Debug, Clone)]
pub struct DeclareOptions {
    pub define_accessors: bool,
    pub validate: bool,
    /// Method names the host type already defines, beyond its fields.
    pub reserved: Vec<String>,
}

impl Default for DeclareOptions {
    fn default() -> Self {
        Self {
            define_accessors: true,
            validate: true,
            reserved: Vec::new(),
        }
    }
}

impl DeclareOptions {
    pub fn reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Type-level completeness configuration: the share registry, the default
/// predicate and any generated boolean accessors.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    shares: ShareRegistry,
    default_predicate: Predicate,
    accessors: Vec<(String, String)>,
    reserved: Vec<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema with the given shares and nothing else. No validation is run.
    pub fn from_shares<I>(shares: I) -> Self
    where
        I: IntoIterator<Item = ShareDescriptor>,
    {
        let mut schema = Self::new();
        schema.set_shares(shares);
        schema
    }

    /// One-shot setup with validation and accessors per `options`.
    pub fn declared<I>(shares: I, options: DeclareOptions) -> Result<Self>
    where
        I: IntoIterator<Item = ShareDescriptor>,
    {
        let mut schema = Self::new();
        schema.declare(shares, options)?;
        Ok(schema)
    }

    pub fn shares(&self) -> &ShareRegistry {
        &self.shares
    }

    /// Replace the whole registry. Bypasses validation.
    pub fn set_shares<I>(&mut self, shares: I)
    where
        I: IntoIterator<Item = ShareDescriptor>,
    {
        self.shares = shares.into_iter().collect();
        debug!(fields = self.shares.len(), "completeness shares replaced");
    }

    pub fn default_predicate(&self) -> &Predicate {
        &self.default_predicate
    }

    pub fn set_default_predicate(&mut self, predicate: Predicate) {
        self.default_predicate = predicate;
    }

    /// Replace the registry, then optionally validate it and generate the
    /// boolean accessors its descriptors ask for.
    ///
    /// Work done before a failure stays applied: the registry is replaced
    /// even when validation fails, and accessors generated before a name
    /// collision are kept.
    pub fn declare<I>(&mut self, shares: I, options: DeclareOptions) -> Result<()>
    where
        I: IntoIterator<Item = ShareDescriptor>,
    {
        self.set_shares(shares);
        self.reserved.extend(options.reserved);

        if options.validate {
            validate_shares(&self.shares)?;
        }

        if options.define_accessors {
            let requested: Vec<(String, String)> = self
                .shares
                .iter()
                .filter_map(|s| s.accessor.clone().map(|name| (name, s.field.clone())))
                .collect();
            for (name, field) in requested {
                self.define_accessor(name, field)?;
            }
        }

        Ok(())
    }

    fn define_accessor(&mut self, name: String, field: String) -> Result<()> {
        if self.method_exists(&name) {
            return Err(CompletenessError::AccessorNameCollision { name });
        }
        debug!(accessor = %name, field = %field, "defined completeness accessor");
        self.accessors.push((name, field));
        Ok(())
    }

    /// Whether `name` is already taken on the host type.
    pub fn method_exists(&self, name: &str) -> bool {
        ENGINE_METHODS.contains(&name)
            || self.shares.contains(name)
            || self.reserved.iter().any(|r| r == name)
            || self.accessor_field(name).is_some()
    }

    /// Field a generated accessor is bound to.
    pub fn accessor_field(&self, name: &str) -> Option<&str> {
        self.accessors
            .iter()
            .find(|(accessor, _)| accessor == name)
            .map(|(_, field)| field.as_str())
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_validates_by_default() {
        let result = Schema::declared(
            vec![ShareDescriptor::new("a", 0.0), ShareDescriptor::new("b", 90.0)],
            DeclareOptions::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            CompletenessError::InvalidWeightSum { sum: 90.0 }
        );
    }

    #[test]
    fn test_declare_without_validation() {
        let options = DeclareOptions {
            validate: false,
            ..DeclareOptions::default()
        };
        let schema = Schema::declared(vec![ShareDescriptor::new("a", 30.0)], options).unwrap();
        assert_eq!(schema.shares().total_weight(), 30.0);
    }

    #[test]
    fn test_failed_validation_still_replaces_registry() {
        let mut schema = Schema::from_shares(vec![ShareDescriptor::new("old", 100.0)]);
        let result = schema.declare(vec![ShareDescriptor::new("new", 50.0)], DeclareOptions::default());
        assert!(result.is_err());
        assert!(schema.shares().contains("new"));
        assert!(!schema.shares().contains("old"));
    }

    #[test]
    fn test_declare_generates_accessors() {
        let schema = Schema::declared(
            vec![
                ShareDescriptor::new("phone", 60.0).accessor("phone_provided"),
                ShareDescriptor::new("email", 40.0),
            ],
            DeclareOptions::default(),
        )
        .unwrap();

        assert_eq!(schema.accessor_field("phone_provided"), Some("phone"));
        assert_eq!(schema.accessor_names().collect::<Vec<_>>(), vec!["phone_provided"]);
        assert!(schema.method_exists("phone_provided"));
    }

    #[test]
    fn test_accessors_skipped_when_disabled() {
        let options = DeclareOptions {
            define_accessors: false,
            ..DeclareOptions::default()
        };
        let schema = Schema::declared(
            vec![ShareDescriptor::new("phone", 100.0).accessor("phone_provided")],
            options,
        )
        .unwrap();
        assert_eq!(schema.accessor_field("phone_provided"), None);
    }

    #[test]
    fn test_accessor_colliding_with_field_name() {
        let result = Schema::declared(
            vec![
                ShareDescriptor::new("phone", 60.0),
                ShareDescriptor::new("email", 40.0).accessor("phone"),
            ],
            DeclareOptions::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            CompletenessError::AccessorNameCollision {
                name: "phone".to_string()
            }
        );
    }

    #[test]
    fn test_accessor_colliding_with_engine_method() {
        let result = Schema::declared(
            vec![ShareDescriptor::new("phone", 100.0).accessor("is_complete")],
            DeclareOptions::default(),
        );
        assert!(matches!(
            result,
            Err(CompletenessError::AccessorNameCollision { .. })
        ));
    }

    #[test]
    fn test_accessor_colliding_with_reserved_name() {
        let options = DeclareOptions::default().reserved(["full_name"]);
        let result = Schema::declared(
            vec![ShareDescriptor::new("first_name", 100.0).accessor("full_name")],
            options,
        );
        assert!(matches!(
            result,
            Err(CompletenessError::AccessorNameCollision { ref name }) if name == "full_name"
        ));
    }

    #[test]
    fn test_collision_keeps_earlier_accessors() {
        let mut schema = Schema::new();
        let result = schema.declare(
            vec![
                ShareDescriptor::new("phone", 50.0).accessor("has_contact"),
                ShareDescriptor::new("email", 50.0).accessor("has_contact"),
            ],
            DeclareOptions::default(),
        );

        assert!(matches!(
            result,
            Err(CompletenessError::AccessorNameCollision { .. })
        ));
        assert_eq!(schema.accessor_field("has_contact"), Some("phone"));
    }

    #[test]
    fn test_redeclare_does_not_overwrite_existing_accessor() {
        let mut schema = Schema::declared(
            vec![ShareDescriptor::new("phone", 100.0).accessor("phone_provided")],
            DeclareOptions::default(),
        )
        .unwrap();

        let result = schema.declare(
            vec![ShareDescriptor::new("mobile", 100.0).accessor("phone_provided")],
            DeclareOptions::default(),
        );
        assert!(result.is_err());
        assert_eq!(schema.accessor_field("phone_provided"), Some("phone"));
    }

    #[test]
    fn test_default_predicate_is_configurable() {
        let mut schema = Schema::new();
        assert_eq!(schema.default_predicate(), &Predicate::NonBlank);
        schema.set_default_predicate(Predicate::NonEmpty);
        assert_eq!(schema.default_predicate(), &Predicate::NonEmpty);
    }
}
