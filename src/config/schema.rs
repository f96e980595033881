use serde::{Deserialize, Serialize};

/// Declarative completeness configuration.
///
/// Example YAML:
/// ```yaml
/// defaults:
///   if: "present?"
/// shares:
///   - field: first_name
///     weight: 20
///   - field: addresses
///     if: "any?"
///     weight: 80
///     accessor: has_addresses
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SharesConfig {
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Check that weights sum to 100 (default: true)
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Generate the boolean accessors named by shares (default: true)
    #[serde(default = "default_true")]
    pub define_accessors: bool,

    /// Method names the host already defines; accessors may not reuse them
    #[serde(default)]
    pub reserved: Vec<String>,

    /// Shares in registry order
    pub shares: Vec<ShareConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Predicate used by shares that do not name one
    #[serde(rename = "if", default)]
    pub predicate: Option<String>,
}

/// One tracked field.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShareConfig {
    pub field: String,

    /// Predicate name, e.g. "present?" or "any?"
    #[serde(rename = "if", default)]
    pub predicate: Option<String>,

    pub weight: f64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub accessor: Option<String>,
}

fn default_true() -> bool {
    true
}
