use anyhow::Result;
use clap::{Args, ValueEnum};
use std::fmt::Write;

use crate::catalog::{Catalog, CatalogKind};

/// Browse the option catalogs
#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Which catalog to show
    #[arg(value_enum)]
    pub kind: CatalogSection,

    /// Only show entries matching this term
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogSection {
    Types,
    Frameworks,
    Styles,
    Features,
    Presets,
}

impl CatalogCommand {
    pub async fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let output = render_section(&catalog, self.kind, self.search.as_deref().unwrap_or(""));
        print!("{}", output);
        Ok(())
    }
}

pub fn render_section(catalog: &Catalog, section: CatalogSection, term: &str) -> String {
    let mut out = String::new();

    let kind = match section {
        CatalogSection::Types => Some(CatalogKind::ProjectType),
        CatalogSection::Frameworks => Some(CatalogKind::Framework),
        CatalogSection::Styles => Some(CatalogKind::DesignStyle),
        CatalogSection::Features => {
            for (category, features) in catalog.search_features(term) {
                let _ = writeln!(out, "{}", category);
                for feature in features {
                    let _ = writeln!(out, "  {}", feature);
                }
            }
            None
        }
        CatalogSection::Presets => {
            let term = term.trim().to_lowercase();
            for preset in &catalog.color_presets {
                if !term.is_empty() && !preset.name.to_lowercase().contains(&term) {
                    continue;
                }
                let c = &preset.colors;
                let _ = writeln!(
                    out,
                    "{:<14} {} {} {} {} {}",
                    preset.name, c.primary, c.secondary, c.accent, c.background, c.text
                );
            }
            None
        }
    };

    if let Some(kind) = kind {
        for group in catalog.search(kind, term) {
            let _ = writeln!(out, "{}", group.category);
            for item in group.items {
                let star = if item.popular { "*" } else { " " };
                let _ = writeln!(
                    out,
                    " {} {:<12} {:<22} {}",
                    star, item.value, item.label, item.description
                );
            }
        }
    }

    if out.is_empty() {
        out.push_str("No matches.\n");
    }
    out
}
