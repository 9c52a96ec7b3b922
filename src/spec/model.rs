//! Project specification data model

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FeatureSet;

pub const DEFAULT_FRAMEWORK: &str = "nextjs";
pub const DEFAULT_DESIGN_STYLE: &str = "modern";

/// The five named color slots of a project palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorScheme {
    pub fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        text: &str,
    ) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }

    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Background => &self.background,
            ColorSlot::Text => &self.text,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            ColorSlot::Primary => self.primary = value,
            ColorSlot::Secondary => self.secondary = value,
            ColorSlot::Accent => self.accent = value,
            ColorSlot::Background => self.background = value,
            ColorSlot::Text => self.text = value,
        }
    }
}

impl Default for ColorScheme {
    /// The "Blue Ocean" palette.
    fn default() -> Self {
        Self::new("#3B82F6", "#1E40AF", "#06B6D4", "#F8FAFC", "#1E293B")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 5] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Accent,
        ColorSlot::Background,
        ColorSlot::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSlot::Primary => "primary",
            ColorSlot::Secondary => "secondary",
            ColorSlot::Accent => "accent",
            ColorSlot::Background => "background",
            ColorSlot::Text => "text",
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color slot '{}'", s))
    }
}

/// Everything the user tells us about the project they want generated.
///
/// `pages`, `database`, `authentication`, `hosting`, `performance`,
/// `security` and `integrations` are carried and persisted but never read
/// by prompt synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSpecification {
    /// Catalog key of the project type, empty when unset
    pub project_type: String,
    pub project_name: String,
    pub description: String,
    pub target_audience: String,
    pub color_scheme: ColorScheme,
    /// Catalog key of the framework
    pub framework: String,
    #[schemars(with = "Vec<String>")]
    pub features: FeatureSet,
    pub pages: Vec<String>,
    /// Catalog key of the design style
    pub design_style: String,
    pub database: String,
    pub authentication: String,
    pub hosting: String,
    pub performance: Vec<String>,
    pub security: Vec<String>,
    pub integrations: Vec<String>,
    pub additional_requirements: String,
}

impl Default for ProjectSpecification {
    fn default() -> Self {
        Self {
            project_type: String::new(),
            project_name: String::new(),
            description: String::new(),
            target_audience: String::new(),
            color_scheme: ColorScheme::default(),
            framework: DEFAULT_FRAMEWORK.to_string(),
            features: FeatureSet::new(),
            pages: Vec::new(),
            design_style: DEFAULT_DESIGN_STYLE.to_string(),
            database: String::new(),
            authentication: String::new(),
            hosting: String::new(),
            performance: Vec::new(),
            security: Vec::new(),
            integrations: Vec::new(),
            additional_requirements: String::new(),
        }
    }
}

impl ProjectSpecification {
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::ProjectType => &self.project_type,
            TextField::ProjectName => &self.project_name,
            TextField::Description => &self.description,
            TextField::TargetAudience => &self.target_audience,
            TextField::Framework => &self.framework,
            TextField::DesignStyle => &self.design_style,
            TextField::AdditionalRequirements => &self.additional_requirements,
        }
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::ProjectType => self.project_type = value,
            TextField::ProjectName => self.project_name = value,
            TextField::Description => self.description = value,
            TextField::TargetAudience => self.target_audience = value,
            TextField::Framework => self.framework = value,
            TextField::DesignStyle => self.design_style = value,
            TextField::AdditionalRequirements => self.additional_requirements = value,
        }
    }
}

/// Single-valued text fields that feed prompt synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ProjectType,
    ProjectName,
    Description,
    TargetAudience,
    Framework,
    DesignStyle,
    AdditionalRequirements,
}

impl TextField {
    pub const ALL: [TextField; 7] = [
        TextField::ProjectType,
        TextField::ProjectName,
        TextField::Description,
        TextField::TargetAudience,
        TextField::Framework,
        TextField::DesignStyle,
        TextField::AdditionalRequirements,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TextField::ProjectType => "projectType",
            TextField::ProjectName => "projectName",
            TextField::Description => "description",
            TextField::TargetAudience => "targetAudience",
            TextField::Framework => "framework",
            TextField::DesignStyle => "designStyle",
            TextField::AdditionalRequirements => "additionalRequirements",
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    /// Accepts the camelCase key or a kebab/snake spelling (`project-name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        TextField::ALL
            .into_iter()
            .find(|field| field.key().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_specification() {
        let spec = ProjectSpecification::default();
        assert_eq!(spec.framework, "nextjs");
        assert_eq!(spec.design_style, "modern");
        assert!(spec.project_type.is_empty());
        assert_eq!(spec.color_scheme.primary, "#3B82F6");
        assert_eq!(spec.color_scheme.text, "#1E293B");
    }

    #[test]
    fn test_camel_case_round_trip_shape() {
        let mut spec = ProjectSpecification::default();
        spec.project_name = "Acme".to_string();
        spec.features.insert("Contact Form");

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["projectName"], "Acme");
        assert_eq!(value["colorScheme"]["accent"], "#06B6D4");
        assert_eq!(value["features"][0], "Contact Form");
        assert!(value.get("additionalRequirements").is_some());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let spec: ProjectSpecification =
            serde_json::from_str(r#"{"projectName": "Old entry"}"#).unwrap();
        assert_eq!(spec.project_name, "Old entry");
        assert_eq!(spec.framework, DEFAULT_FRAMEWORK);
        assert_eq!(spec.color_scheme, ColorScheme::default());
    }

    #[test]
    fn test_text_field_parsing() {
        assert_eq!("projectName".parse::<TextField>(), Ok(TextField::ProjectName));
        assert_eq!("project-name".parse::<TextField>(), Ok(TextField::ProjectName));
        assert_eq!(
            "additional_requirements".parse::<TextField>(),
            Ok(TextField::AdditionalRequirements)
        );
        assert!("pages".parse::<TextField>().is_err());
    }

    #[test]
    fn test_color_slots() {
        let mut colors = ColorScheme::default();
        colors.set("Accent".parse().unwrap(), "#000000");
        assert_eq!(colors.get(ColorSlot::Accent), "#000000");
        assert!("border".parse::<ColorSlot>().is_err());
    }
}
