//! Static reference catalogs
//!
//! Project types, frameworks, design styles, features and color presets used
//! for label lookup and selection. The prompt synthesizer never sees these
//! tables directly; it receives the labels resolved here.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::prompt::ResolvedLabels;
use crate::spec::{ColorScheme, ProjectSpecification};

/// A selectable entry in one of the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub value: String,
    pub label: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_ai_capable")]
    pub ai_capable: bool,
}

fn default_ai_capable() -> bool {
    true
}

impl CatalogItem {
    pub fn new(value: &str, label: &str, category: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            popular: false,
            ai_capable: true,
        }
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    fn matches(&self, term: &str) -> bool {
        self.label.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    pub features: Vec<String>,
}

impl FeatureCategory {
    pub fn new(name: &str, features: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPreset {
    pub name: String,
    pub colors: ColorScheme,
}

impl ColorPreset {
    pub fn new(name: &str, colors: ColorScheme) -> Self {
        Self {
            name: name.to_string(),
            colors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    ProjectType,
    Framework,
    DesignStyle,
}

/// Search results for one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a CatalogItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub project_types: Vec<CatalogItem>,
    pub frameworks: Vec<CatalogItem>,
    pub design_styles: Vec<CatalogItem>,
    pub feature_categories: Vec<FeatureCategory>,
    pub color_presets: Vec<ColorPreset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            project_types: builtin::project_types(),
            frameworks: builtin::frameworks(),
            design_styles: builtin::design_styles(),
            feature_categories: builtin::feature_categories(),
            color_presets: builtin::color_presets(),
        }
    }

    pub fn items(&self, kind: CatalogKind) -> &[CatalogItem] {
        match kind {
            CatalogKind::ProjectType => &self.project_types,
            CatalogKind::Framework => &self.frameworks,
            CatalogKind::DesignStyle => &self.design_styles,
        }
    }

    pub fn find(&self, kind: CatalogKind, value: &str) -> Option<&CatalogItem> {
        if value.is_empty() {
            return None;
        }
        self.items(kind).iter().find(|item| item.value == value)
    }

    pub fn label(&self, kind: CatalogKind, value: &str) -> Option<&str> {
        self.find(kind, value).map(|item| item.label.as_str())
    }

    /// Looks up the labels for the catalog keys held by `spec`.
    pub fn resolve(&self, spec: &ProjectSpecification) -> ResolvedLabels {
        ResolvedLabels {
            project_type: self
                .label(CatalogKind::ProjectType, &spec.project_type)
                .map(str::to_string),
            framework: self
                .label(CatalogKind::Framework, &spec.framework)
                .map(str::to_string),
            design_style: self
                .label(CatalogKind::DesignStyle, &spec.design_style)
                .map(str::to_string),
        }
    }

    /// Case-insensitive search over label and description of AI-capable
    /// items. An empty term returns every AI-capable item.
    pub fn search(&self, kind: CatalogKind, term: &str) -> Vec<CategoryGroup<'_>> {
        let term = term.trim().to_lowercase();
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

        for item in self.items(kind).iter().filter(|item| item.ai_capable) {
            if !term.is_empty() && !item.matches(&term) {
                continue;
            }
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: &item.category,
                    items: vec![item],
                }),
            }
        }

        groups
    }

    /// Features whose name contains `term`, grouped by their category.
    pub fn search_features(&self, term: &str) -> Vec<(&str, Vec<&str>)> {
        let term = term.trim().to_lowercase();
        self.feature_categories
            .iter()
            .filter_map(|category| {
                let features: Vec<&str> = category
                    .features
                    .iter()
                    .filter(|f| term.is_empty() || f.to_lowercase().contains(&term))
                    .map(String::as_str)
                    .collect();
                if features.is_empty() {
                    None
                } else {
                    Some((category.name.as_str(), features))
                }
            })
            .collect()
    }

    pub fn is_known_feature(&self, feature: &str) -> bool {
        self.feature_categories
            .iter()
            .any(|category| category.features.iter().any(|f| f == feature))
    }

    pub fn preset(&self, name: &str) -> Option<&ColorPreset> {
        let name = name.trim();
        self.color_presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.project_types.len(), 10);
        assert_eq!(catalog.frameworks.len(), 8);
        assert_eq!(catalog.design_styles.len(), 8);
        assert_eq!(catalog.feature_categories.len(), 5);
        assert_eq!(catalog.color_presets.len(), 5);
    }

    #[test]
    fn test_resolve_known_and_unknown_keys() {
        let catalog = Catalog::builtin();
        let mut spec = ProjectSpecification::default();
        spec.project_type = "landing".to_string();
        spec.framework = "does-not-exist".to_string();

        let labels = catalog.resolve(&spec);
        assert_eq!(labels.project_type.as_deref(), Some("Landing Page"));
        assert_eq!(labels.framework, None);
        assert_eq!(labels.design_style.as_deref(), Some("Modern & Clean"));
    }

    #[test]
    fn test_empty_key_is_unresolved() {
        let catalog = Catalog::builtin();
        assert!(catalog.find(CatalogKind::ProjectType, "").is_none());
    }

    #[test]
    fn test_search_groups_by_category() {
        let catalog = Catalog::builtin();

        let all = catalog.search(CatalogKind::ProjectType, "");
        let categories: Vec<&str> = all.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Web", "Mobile", "Design"]);
        assert_eq!(all.iter().map(|g| g.items.len()).sum::<usize>(), 10);

        let react = catalog.search(CatalogKind::Framework, "REACT");
        let values: Vec<&str> = react
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.value.as_str()))
            .collect();
        assert_eq!(values, vec!["nextjs", "react", "react-native"]);
    }

    #[test]
    fn test_search_skips_items_ai_cannot_build() {
        let mut catalog = Catalog::builtin();
        catalog.frameworks[0].ai_capable = false;
        let groups = catalog.search(CatalogKind::Framework, "next");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_feature_search_and_presets() {
        let catalog = Catalog::builtin();
        let found = catalog.search_features("cart");
        assert_eq!(found, vec![("E-commerce Features", vec!["Shopping Cart"])]);

        assert!(catalog.is_known_feature("Wishlist"));
        assert!(!catalog.is_known_feature("Teleportation"));

        let preset = catalog.preset("dark mode").unwrap();
        assert_eq!(preset.colors.background, "#111827");
        assert!(catalog.preset("Neon").is_none());
    }
}
