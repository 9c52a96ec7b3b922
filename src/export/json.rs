use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::spec::{ColorScheme, ProjectSpecification};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub project_info: ProjectInfo<'a>,
    pub technical: Technical<'a>,
    pub features: &'a [String],
    pub prompt: &'a str,
    pub generated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub project_type: &'a str,
    pub description: &'a str,
    pub target_audience: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Technical<'a> {
    pub framework: &'a str,
    pub design_style: &'a str,
    pub color_scheme: &'a ColorScheme,
}

impl<'a> ExportDocument<'a> {
    pub fn new(spec: &'a ProjectSpecification, prompt: &'a str, generated_at: DateTime<Utc>) -> Self {
        Self {
            project_info: ProjectInfo {
                name: &spec.project_name,
                project_type: &spec.project_type,
                description: &spec.description,
                target_audience: &spec.target_audience,
            },
            technical: Technical {
                framework: &spec.framework,
                design_style: &spec.design_style,
                color_scheme: &spec.color_scheme,
            },
            features: spec.features.as_slice(),
            prompt,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Pretty-printed structured export; catalog keys are kept raw.
pub fn render(
    spec: &ProjectSpecification,
    prompt: &str,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportDocument::new(spec, prompt, generated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_export_shape() {
        let mut spec = ProjectSpecification::default();
        spec.project_type = "saas".to_string();
        spec.project_name = "Ledger".to_string();
        spec.features.insert("User Dashboard");

        let at = DateTime::parse_from_rfc3339("2025-05-06T07:08:09.010Z")
            .unwrap()
            .with_timezone(&Utc);
        let raw = render(&spec, "the prompt", at).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["projectInfo"]["name"], "Ledger");
        assert_eq!(value["projectInfo"]["type"], "saas");
        assert_eq!(value["technical"]["framework"], "nextjs");
        assert_eq!(value["technical"]["designStyle"], "modern");
        assert_eq!(value["technical"]["colorScheme"]["primary"], "#3B82F6");
        assert_eq!(value["features"], serde_json::json!(["User Dashboard"]));
        assert_eq!(value["prompt"], "the prompt");
        assert_eq!(value["generatedAt"], "2025-05-06T07:08:09.010Z");
        assert!(raw.contains("\n  \"projectInfo\": {"));
    }
}
