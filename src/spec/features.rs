//! Ordered, duplicate-free feature selection

use serde::{Deserialize, Serialize};

/// Features picked for a project, kept in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSet {
    items: Vec<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature at the end. Returns false when it was already selected.
    pub fn insert(&mut self, feature: impl Into<String>) -> bool {
        let feature = feature.into();
        if self.contains(&feature) {
            return false;
        }
        self.items.push(feature);
        true
    }

    /// Removes a feature. Returns false when it was not selected.
    pub fn remove(&mut self, feature: &str) -> bool {
        match self.items.iter().position(|f| f == feature) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Checkbox semantics: `checked` adds, unchecked removes.
    pub fn set(&mut self, feature: &str, checked: bool) -> bool {
        if checked {
            self.insert(feature)
        } else {
            self.remove(feature)
        }
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, feature: &str) -> bool {
        if self.remove(feature) {
            false
        } else {
            self.items.push(feature.to_string());
            true
        }
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.items.iter().any(|f| f == feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for FeatureSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = Self::new();
        for value in values {
            set.insert(value);
        }
        set
    }
}

impl From<FeatureSet> for Vec<String> {
    fn from(set: FeatureSet) -> Self {
        set.items
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
