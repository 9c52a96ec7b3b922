use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::catalog::{Catalog, CatalogKind};
use crate::spec::ProjectSpecification;

const NOT_SPECIFIED: &str = "Not specified";

pub fn render(
    spec: &ProjectSpecification,
    prompt: &str,
    catalog: &Catalog,
    generated_at: DateTime<Utc>,
) -> String {
    let title = non_empty_or(&spec.project_name, "AI Project Prompt");
    let project_type = catalog
        .label(CatalogKind::ProjectType, &spec.project_type)
        .unwrap_or(NOT_SPECIFIED);
    let framework = catalog
        .label(CatalogKind::Framework, &spec.framework)
        .unwrap_or(NOT_SPECIFIED);
    let audience = non_empty_or(&spec.target_audience, NOT_SPECIFIED);
    let description = non_empty_or(&spec.description, "No description provided");
    let colors = &spec.color_scheme;
    let features = spec
        .features
        .iter()
        .map(|feature| format!("- {}", feature))
        .collect::<Vec<_>>()
        .join("\n");

    let mut doc = String::new();
    let _ = write!(
        doc,
        "# {title}\n\
\n\
## Project Overview\n\
- **Type**: {project_type}\n\
- **Target Audience**: {audience}\n\
- **Framework**: {framework}\n\
\n\
## Description\n\
{description}\n\
\n\
## Color Scheme\n\
- **Primary**: {primary}\n\
- **Secondary**: {secondary}\n\
- **Accent**: {accent}\n\
- **Background**: {background}\n\
- **Text**: {text}\n\
\n\
## Features\n\
{features}\n\
\n\
## AI Prompt\n\
```\n\
{prompt}\n\
```\n\
\n\
---\n\
*Generated on {date}*\n",
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
        date = generated_at.format("%Y-%m-%d"),
    );
    doc
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
