use super::predicate::Predicate;

/// Weight, predicate and labels for one tracked field.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareDescriptor {
    pub field: String,
    /// `None` falls back to the schema's default predicate.
    pub predicate: Option<Predicate>,
    pub weight: f64,
    pub title: Option<String>,
    /// Name of a generated boolean accessor reporting `score > 0` for this field.
    pub accessor: Option<String>,
}

impl ShareDescriptor {
    pub fn new(field: impl Into<String>, weight: f64) -> Self {
        Self {
            field: field.into(),
            predicate: None,
            weight,
            title: None,
            accessor: None,
        }
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn accessor(mut self, name: impl Into<String>) -> Self {
        self.accessor = Some(name.into());
        self
    }

    /// Explicit title, or the humanized field name.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => humanize(&self.field),
        }
    }
}

/// Ordered field -> share mapping.
///
/// Iteration follows declaration order. Declaring a field twice keeps the
/// first position and the last descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareRegistry {
    shares: Vec<ShareDescriptor>,
}

impl ShareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, share: ShareDescriptor) {
        match self.shares.iter_mut().find(|s| s.field == share.field) {
            Some(existing) => *existing = share,
            None => self.shares.push(share),
        }
    }

    pub fn get(&self, field: &str) -> Option<&ShareDescriptor> {
        self.shares.iter().find(|s| s.field == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShareDescriptor> {
        self.shares.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.shares.iter().map(|s| s.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.shares.iter().fold(0.0, |sum, s| sum + s.weight)
    }
}

impl FromIterator<ShareDescriptor> for ShareRegistry {
    fn from_iter<I: IntoIterator<Item = ShareDescriptor>>(iter: I) -> Self {
        let mut registry = ShareRegistry::new();
        for share in iter {
            registry.insert(share);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a ShareRegistry {
    type Item = &'a ShareDescriptor;
    type IntoIter = std::slice::Iter<'a, ShareDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Turn a field identifier into a capitalized label: `first_name` -> `First Name`.
///
/// A trailing `_id` is dropped, as is surrounding underscore noise.
pub fn humanize(field: &str) -> String {
    let base = field.strip_suffix("_id").filter(|b| !b.is_empty()).unwrap_or(field);
    base.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
