use std::fmt;

/// One user-chosen value for a single feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Category(String),
    Number(i64),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Category(v) => write!(f, "{v}"),
            FeatureValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A single prediction input: one value per feature column, kept in the
/// dataset's schema order because the model was fit on exactly that schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    entries: Vec<(String, FeatureValue)>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut record = InputRecord::new();
        record.push("Age", FeatureValue::Number(44));
        record.push("Gender", FeatureValue::Category("Female".into()));
        record.push("Season", FeatureValue::Category("Fall".into()));

        let names: Vec<&str> = record.feature_names().collect();
        assert_eq!(names, vec!["Age", "Gender", "Season"]);
    }

    #[test]
    fn lookup_by_name() {
        let mut record = InputRecord::new();
        record.push("Age", FeatureValue::Number(30));

        assert_eq!(record.get("Age"), Some(&FeatureValue::Number(30)));
        assert_eq!(record.get("Gender"), None);
    }

    #[test]
    fn values_display_plainly() {
        assert_eq!(FeatureValue::Number(18).to_string(), "18");
        assert_eq!(FeatureValue::Category("Male".into()).to_string(), "Male");
    }
}
