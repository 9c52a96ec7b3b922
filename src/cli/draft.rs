//! Draft command: edit the working specification

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

use super::workspace::{read_spec_file, Workspace};
use crate::catalog::{Catalog, CatalogKind};
use crate::config::Config;
use crate::history::KeyValueStore;
use crate::session::Session;
use crate::spec::{ColorSlot, ProjectSpecification, TextField};
use crate::utils::text::color::normalize_hex;

/// Edit the working specification
#[derive(Debug, Args)]
pub struct DraftCommand {
    #[command(subcommand)]
    pub command: DraftSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DraftSubcommand {
    /// Show the working specification
    Show {
        /// Print the raw specification as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a text field (project-type, project-name, description,
    /// target-audience, framework, design-style, additional-requirements)
    Set {
        field: String,
        /// New value; omit to clear the field
        value: Vec<String>,
    },
    /// Toggle a feature, or force it with --on/--off
    Feature {
        name: String,
        #[arg(long, conflicts_with = "off")]
        on: bool,
        #[arg(long)]
        off: bool,
        /// Allow a feature that is not in the catalog
        #[arg(long)]
        custom: bool,
    },
    /// Apply a named color preset
    Preset { name: String },
    /// Set one color slot (primary, secondary, accent, background, text)
    Color { slot: String, value: String },
    /// Replace the draft with a JSON/YAML spec file
    Import { path: PathBuf },
    /// Start over from the default specification
    Reset,
}

impl DraftCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let mut workspace = Workspace::open(config);

        if let DraftSubcommand::Show { json } = self.command {
            let output = if json {
                serde_json::to_string_pretty(workspace.session.spec())?
            } else {
                describe(workspace.session.spec(), workspace.session.catalog())
            };
            println!("{}", output);
            return Ok(());
        }

        let message = self.apply(&mut workspace.session)?;
        workspace.store_draft();
        println!("{}", message);
        Ok(())
    }

    /// Applies an edit to the session and returns a one-line summary.
    pub fn apply<S: KeyValueStore>(&self, session: &mut Session<S>) -> Result<String> {
        match &self.command {
            DraftSubcommand::Show { .. } => Ok(String::new()),
            DraftSubcommand::Set { field, value } => {
                let field: TextField = field.parse().map_err(|e: String| anyhow!(e))?;
                let value = value.join(" ");
                check_catalog_key(session.catalog(), field, &value)?;
                session.update(|spec| spec.set_field(field, value.clone()));
                Ok(if value.is_empty() {
                    format!("Cleared {}", field.key())
                } else {
                    format!("Set {} to '{}'", field.key(), value)
                })
            }
            DraftSubcommand::Feature { name, on, off, custom } => {
                if !custom && !session.catalog().is_known_feature(name) {
                    bail!(
                        "'{}' is not a catalog feature; see `promptgen catalog features` or pass --custom",
                        name
                    );
                }
                let selected = if *on || *off {
                    let checked = *on;
                    session.update(|spec| {
                        spec.features.set(name, checked);
                    });
                    checked
                } else {
                    session.toggle_feature(name)
                };
                Ok(format!(
                    "{} feature '{}'",
                    if selected { "Selected" } else { "Deselected" },
                    name
                ))
            }
            DraftSubcommand::Preset { name } => {
                let preset = session
                    .catalog()
                    .preset(name)
                    .ok_or_else(|| {
                        let names: Vec<&str> = session
                            .catalog()
                            .color_presets
                            .iter()
                            .map(|p| p.name.as_str())
                            .collect();
                        anyhow!("unknown preset '{}'; available: {}", name, names.join(", "))
                    })?
                    .clone();
                session.update(|spec| spec.color_scheme = preset.colors.clone());
                Ok(format!("Applied color preset '{}'", preset.name))
            }
            DraftSubcommand::Color { slot, value } => {
                let slot: ColorSlot = slot.parse().map_err(|e: String| anyhow!(e))?;
                let hex = normalize_hex(value)
                    .ok_or_else(|| anyhow!("'{}' is not a hex color like #3B82F6", value))?;
                session.update(|spec| spec.color_scheme.set(slot, hex.clone()));
                Ok(format!("Set {} color to {}", slot, hex))
            }
            DraftSubcommand::Import { path } => {
                let spec = read_spec_file(path)?;
                session.replace_spec(spec);
                Ok(format!("Imported draft from {}", path.display()))
            }
            DraftSubcommand::Reset => {
                session.replace_spec(ProjectSpecification::default());
                Ok("Draft reset to defaults".to_string())
            }
        }
    }
}

/// Rejects catalog-backed fields set to a key the catalog does not know.
/// The project type may be cleared; framework and design style may not.
fn check_catalog_key(catalog: &Catalog, field: TextField, value: &str) -> Result<()> {
    let kind = match field {
        TextField::ProjectType if value.is_empty() => return Ok(()),
        TextField::ProjectType => CatalogKind::ProjectType,
        TextField::Framework => CatalogKind::Framework,
        TextField::DesignStyle => CatalogKind::DesignStyle,
        _ => return Ok(()),
    };

    if catalog.find(kind, value).is_some() {
        return Ok(());
    }

    let known: Vec<&str> = catalog.items(kind).iter().map(|i| i.value.as_str()).collect();
    bail!(
        "unknown {} '{}'; expected one of: {}",
        field.key(),
        value,
        known.join(", ")
    )
}

/// Human-readable summary of a specification with resolved labels.
pub fn describe(spec: &ProjectSpecification, catalog: &Catalog) -> String {
    let mut out = String::new();
    let labelled = |kind: CatalogKind, key: &str| match catalog.label(kind, key) {
        Some(label) => format!("{} ({})", key, label),
        None if key.is_empty() => "(unset)".to_string(),
        None => format!("{} (unknown)", key),
    };

    let _ = writeln!(out, "Project type:    {}", labelled(CatalogKind::ProjectType, &spec.project_type));
    let _ = writeln!(out, "Project name:    {}", or_unset(spec.field(TextField::ProjectName)));
    let _ = writeln!(out, "Description:     {}", or_unset(spec.field(TextField::Description)));
    let _ = writeln!(out, "Target audience: {}", or_unset(spec.field(TextField::TargetAudience)));
    let _ = writeln!(out, "Framework:       {}", labelled(CatalogKind::Framework, &spec.framework));
    let _ = writeln!(out, "Design style:    {}", labelled(CatalogKind::DesignStyle, &spec.design_style));
    let _ = writeln!(out, "Colors:");
    for slot in ColorSlot::ALL {
        let _ = writeln!(out, "  {:<11}{}", slot.as_str(), spec.color_scheme.get(slot));
    }
    if spec.features.is_empty() {
        let _ = writeln!(out, "Features:        (none)");
    } else {
        let _ = writeln!(out, "Features:");
        for feature in spec.features.iter() {
            let _ = writeln!(out, "  - {}", feature);
        }
    }
    let _ = write!(
        out,
        "Additional:      {}",
        or_unset(spec.field(TextField::AdditionalRequirements))
    );
    out
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}
