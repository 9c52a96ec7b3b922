//! Deterministic prompt text assembly

use std::fmt::Write;

use crate::spec::ProjectSpecification;

pub const FALLBACK_PROJECT_TYPE: &str = "web application";
pub const FALLBACK_FRAMEWORK: &str = "Next.js";
pub const FALLBACK_DESIGN_STYLE: &str = "Modern & Clean";

pub const TECHNICAL_HEADING: &str = "Technical Requirements:";
pub const COLOR_HEADING: &str = "Color Scheme:";
pub const FEATURES_HEADING: &str = "Features to implement:";
pub const ADDITIONAL_HEADING: &str = "Additional Requirements:";
pub const QUALITY_HEADING: &str = "Please ensure:";

/// Closing directives appended to every prompt.
pub const QUALITY_DIRECTIVES: [&str; 7] = [
    "Modern and responsive design for all screen sizes",
    "Clean, semantic HTML structure",
    "Accessible and user-friendly interface",
    "Optimized performance and fast loading",
    "Cross-browser compatibility",
    "SEO-friendly structure",
    "Well-organized and maintainable code",
];

/// Catalog labels for the keys of a specification. `None` means the key was
/// empty or unknown and the fallback label applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLabels {
    pub project_type: Option<String>,
    pub framework: Option<String>,
    pub design_style: Option<String>,
}

impl ResolvedLabels {
    pub fn project_type(&self) -> &str {
        self.project_type.as_deref().unwrap_or(FALLBACK_PROJECT_TYPE)
    }

    pub fn framework(&self) -> &str {
        self.framework.as_deref().unwrap_or(FALLBACK_FRAMEWORK)
    }

    pub fn design_style(&self) -> &str {
        self.design_style.as_deref().unwrap_or(FALLBACK_DESIGN_STYLE)
    }
}

/// Renders `spec` into prompt text. Never fails: missing values fall back to
/// default labels or drop their optional section.
pub fn synthesize(spec: &ProjectSpecification, labels: &ResolvedLabels) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail; the fmt::Result is discarded.
    let _ = write_opening(&mut prompt, spec, labels);
    let _ = write_technical(&mut prompt, labels);
    let _ = write_colors(&mut prompt, spec);

    if !spec.features.is_empty() {
        prompt.push('\n');
        prompt.push_str(FEATURES_HEADING);
        prompt.push('\n');
        for feature in spec.features.iter() {
            let _ = writeln!(prompt, "- {}", feature);
        }
    }

    if !spec.additional_requirements.is_empty() {
        let _ = write!(
            prompt,
            "\n{}\n{}\n",
            ADDITIONAL_HEADING, spec.additional_requirements
        );
    }

    prompt.push('\n');
    prompt.push_str(QUALITY_HEADING);
    prompt.push('\n');
    for directive in QUALITY_DIRECTIVES {
        let _ = writeln!(prompt, "- {}", directive);
    }

    prompt
}

fn write_opening(
    out: &mut String,
    spec: &ProjectSpecification,
    labels: &ResolvedLabels,
) -> std::fmt::Result {
    write!(out, "Create a {}", labels.project_type().to_lowercase())?;
    if !spec.project_name.is_empty() {
        write!(out, " called \"{}\"", spec.project_name)?;
    }
    if !spec.description.is_empty() {
        write!(out, ". {}", spec.description)?;
    }
    if !spec.target_audience.is_empty() {
        write!(out, " The target audience is {}.", spec.target_audience)?;
    }
    Ok(())
}

fn write_technical(out: &mut String, labels: &ResolvedLabels) -> std::fmt::Result {
    write!(out, "\n\n{}\n", TECHNICAL_HEADING)?;
    writeln!(out, "- Framework: {}", labels.framework())?;
    writeln!(out, "- Design Style: {}", labels.design_style())
}

fn write_colors(out: &mut String, spec: &ProjectSpecification) -> std::fmt::Result {
    let colors = &spec.color_scheme;
    write!(out, "\n{}\n", COLOR_HEADING)?;
    writeln!(out, "- Primary Color: {}", colors.primary)?;
    writeln!(out, "- Secondary Color: {}", colors.secondary)?;
    writeln!(out, "- Accent Color: {}", colors.accent)?;
    writeln!(out, "- Background: {}", colors.background)?;
    writeln!(out, "- Text Color: {}", colors.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::spec::{ColorScheme, FeatureSet};

    fn acme() -> ProjectSpecification {
        ProjectSpecification {
            project_type: "landing".to_string(),
            project_name: "Acme".to_string(),
            features: ["Contact Form"].into_iter().collect::<FeatureSet>(),
            color_scheme: ColorScheme::new("#3B82F6", "#1E40AF", "#06B6D4", "#F8FAFC", "#1E293B"),
            ..ProjectSpecification::default()
        }
    }

    fn render(spec: &ProjectSpecification) -> String {
        synthesize(spec, &Catalog::builtin().resolve(spec))
    }

    #[test]
    fn test_landing_page_example() {
        let expected = "Create a landing page called \"Acme\"\n\
\n\
Technical Requirements:\n\
- Framework: Next.js\n\
- Design Style: Modern & Clean\n\
\n\
Color Scheme:\n\
- Primary Color: #3B82F6\n\
- Secondary Color: #1E40AF\n\
- Accent Color: #06B6D4\n\
- Background: #F8FAFC\n\
- Text Color: #1E293B\n\
\n\
Features to implement:\n\
- Contact Form\n\
\n\
Please ensure:\n\
- Modern and responsive design for all screen sizes\n\
- Clean, semantic HTML structure\n\
- Accessible and user-friendly interface\n\
- Optimized performance and fast loading\n\
- Cross-browser compatibility\n\
- SEO-friendly structure\n\
- Well-organized and maintainable code\n";

        assert_eq!(render(&acme()), expected);
    }

    #[test]
    fn test_fallback_labels_for_empty_specification() {
        let mut spec = ProjectSpecification::default();
        spec.framework.clear();
        spec.design_style = "unknown".to_string();

        let prompt = render(&spec);
        assert!(prompt.starts_with("Create a web application\n\n"));
        assert!(prompt.contains("- Framework: Next.js\n"));
        assert!(prompt.contains("- Design Style: Modern & Clean\n"));
        assert!(!prompt.contains("called"));
    }

    #[test]
    fn test_optional_sections_absent_when_empty() {
        let prompt = render(&ProjectSpecification::default());
        assert!(!prompt.contains(FEATURES_HEADING));
        assert!(!prompt.contains(ADDITIONAL_HEADING));
        assert_eq!(prompt.matches(COLOR_HEADING).count(), 1);
        assert!(prompt.ends_with("- Well-organized and maintainable code\n"));
    }

    #[test]
    fn test_description_audience_and_requirements() {
        let mut spec = acme();
        spec.description = "A product launch page".to_string();
        spec.target_audience = "small business owners".to_string();
        spec.additional_requirements = "Use a hero video.\nKeep it fast.".to_string();

        let prompt = render(&spec);
        assert!(prompt.starts_with(
            "Create a landing page called \"Acme\". A product launch page The target audience is small business owners.\n\n"
        ));
        assert!(prompt.contains(
            "- Contact Form\n\nAdditional Requirements:\nUse a hero video.\nKeep it fast.\n\nPlease ensure:\n"
        ));
    }

    #[test]
    fn test_every_color_listed_once_whatever_else_is_set() {
        let mut spec = acme();
        spec.additional_requirements = "Color Scheme: ignore".to_string();
        spec.color_scheme = ColorScheme::new("#111111", "#222222", "#333333", "#444444", "#555555");

        let prompt = render(&spec);
        assert_eq!(prompt.matches("\nColor Scheme:\n").count(), 1);
        for hex in ["#111111", "#222222", "#333333", "#444444", "#555555"] {
            assert_eq!(prompt.matches(hex).count(), 1, "{} listed once", hex);
        }
    }

    #[test]
    fn test_features_keep_insertion_order() {
        let mut spec = ProjectSpecification::default();
        for feature in ["Wishlist", "Blog Section", "Contact Form"] {
            spec.features.insert(feature);
        }
        let prompt = render(&spec);
        assert!(prompt.contains(
            "Features to implement:\n- Wishlist\n- Blog Section\n- Contact Form\n"
        ));
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let spec = acme();
        let labels = Catalog::builtin().resolve(&spec);
        assert_eq!(synthesize(&spec, &labels), synthesize(&spec, &labels));
    }

    #[test]
    fn test_unused_fields_do_not_change_output() {
        let plain = acme();
        let mut decorated = acme();
        decorated.database = "postgres".to_string();
        decorated.pages = vec!["About".to_string()];
        decorated.integrations = vec!["Stripe".to_string()];
        assert_eq!(render(&plain), render(&decorated));
    }

    #[test]
    fn test_injected_labels_are_used_verbatim() {
        let labels = ResolvedLabels {
            project_type: Some("Internal Tool".to_string()),
            framework: Some("Leptos".to_string()),
            design_style: None,
        };
        let prompt = synthesize(&ProjectSpecification::default(), &labels);
        assert!(prompt.starts_with("Create a internal tool\n"));
        assert!(prompt.contains("- Framework: Leptos\n"));
        assert!(prompt.contains("- Design Style: Modern & Clean\n"));
    }
}
