use std::collections::{BTreeMap, HashMap};

/// A momentary view of one field's value on a host object.
///
/// Collections only carry their length: no built-in predicate looks inside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(usize),
    Map(usize),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Stable name of the value kind, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
        }
    }
}

/// Named read access to the fields of a host object.
pub trait Fields {
    /// Current value of `name`, or `None` if the host has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Type name used in error messages.
    fn owner_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<'a, T> From<&'a [T]> for FieldValue<'a> {
    fn from(value: &'a [T]) -> Self {
        FieldValue::List(value.len())
    }
}

impl<'a, T> From<&'a Vec<T>> for FieldValue<'a> {
    fn from(value: &'a Vec<T>) -> Self {
        FieldValue::List(value.len())
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for FieldValue<'a> {
    fn from(value: &'a HashMap<K, V, S>) -> Self {
        FieldValue::Map(value.len())
    }
}

impl<'a, K, V> From<&'a BTreeMap<K, V>> for FieldValue<'a> {
    fn from(value: &'a BTreeMap<K, V>) -> Self {
        FieldValue::Map(value.len())
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo {
        baz: Option<String>,
    }

    impl Fields for Foo {
        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "baz" => Some(self.baz.as_ref().into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_option_none_is_null() {
        let value: Option<&String> = None;
        assert_eq!(FieldValue::from(value), FieldValue::Null);
    }

    #[test]
    fn test_option_some_unwraps() {
        let text = "catch".to_string();
        assert_eq!(FieldValue::from(Some(&text)), FieldValue::Text("catch"));
    }

    #[test]
    fn test_collections_carry_length() {
        let list = vec!["City,State,Zip".to_string()];
        assert_eq!(FieldValue::from(&list), FieldValue::List(1));

        let map: HashMap<String, u32> = HashMap::new();
        assert_eq!(FieldValue::from(&map), FieldValue::Map(0));
    }

    #[test]
    fn test_owner_name_strips_module_path() {
        let foo = Foo { baz: None };
        assert_eq!(foo.owner_name(), "Foo");
        assert_eq!(foo.field("baz"), Some(FieldValue::Null));
        assert_eq!(foo.field("bar"), None);
    }
}
