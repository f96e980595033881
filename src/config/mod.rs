mod schema;

pub use schema::{DefaultsConfig, ShareConfig, SharesConfig};

use anyhow::{Context, Result};

use crate::shares::{DeclareOptions, PredicateTable, Schema, ShareDescriptor};

/// Parse a YAML share declaration into a [`Schema`].
///
/// Predicate names resolve through `predicates`, so custom predicates must be
/// registered there before parsing.
///
/// # Errors
///
/// Returns an error if:
/// - The YAML cannot be parsed
/// - A share or the defaults name an unknown predicate
/// - Validation or accessor generation fails (see [`Schema::declare`])
pub fn parse_schema(yaml: &str, predicates: &PredicateTable) -> Result<Schema> {
    let config: SharesConfig = serde_saphyr::from_str(yaml)
        .context("Failed to parse completeness shares: invalid YAML")?;
    build_schema(config, predicates)
}

/// Build a [`Schema`] from an already deserialized config.
pub fn build_schema(config: SharesConfig, predicates: &PredicateTable) -> Result<Schema> {
    let mut schema = Schema::new();

    if let Some(name) = config.defaults.and_then(|d| d.predicate) {
        let predicate = predicates
            .resolve(&name)
            .context("defaults.if: invalid predicate")?;
        schema.set_default_predicate(predicate);
    }

    let mut shares = Vec::with_capacity(config.shares.len());
    for (i, share) in config.shares.into_iter().enumerate() {
        let mut descriptor = ShareDescriptor::new(share.field, share.weight);
        if let Some(name) = share.predicate {
            let predicate = predicates.resolve(&name).with_context(|| {
                format!("shares[{}] ({}): invalid predicate", i, descriptor.field)
            })?;
            descriptor = descriptor.predicate(predicate);
        }
        descriptor.title = share.title;
        descriptor.accessor = share.accessor;
        shares.push(descriptor);
    }

    let options = DeclareOptions {
        define_accessors: config.define_accessors,
        validate: config.validate,
        reserved: config.reserved,
    };
    schema
        .declare(shares, options)
        .context("Failed to declare completeness shares")?;

    Ok(schema)
}
