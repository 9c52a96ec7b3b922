//! Schema command: JSON schema generation and validation for spec files

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use schemars::schema_for;
use serde_json::Value;
use std::{fs, path::Path, path::PathBuf};

use crate::spec::ProjectSpecification;

const SCHEMA_TITLE: &str = "Project Specification";
const SCHEMA_DESCRIPTION: &str = "Structured project description rendered into an AI generation prompt";

/// Generate and validate spec file schemas
#[derive(Debug, Args)]
pub struct SchemaCommand {
    /// Output format for schema generation
    #[arg(short, long, default_value = "json")]
    pub format: SchemaFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<SchemaSubcommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
pub enum SchemaSubcommand {
    /// Print the JSON schema for spec files
    Generate,
    /// Check a JSON/YAML spec file against the schema
    Validate { spec_file: PathBuf },
}

impl SchemaCommand {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Some(SchemaSubcommand::Validate { spec_file }) => {
                let problems = validate_file(spec_file)?;
                if problems.is_empty() {
                    println!("{} is a valid project specification", spec_file.display());
                    return Ok(());
                }
                println!("{} failed validation:", spec_file.display());
                for problem in &problems {
                    println!("  - {}", problem);
                }
                bail!("{} schema violation(s)", problems.len())
            }
            Some(SchemaSubcommand::Generate) | None => self.generate(),
        }
    }

    fn generate(&self) -> Result<()> {
        let schema = spec_schema()?;
        let output = match self.format {
            SchemaFormat::Json => serde_json::to_string_pretty(&schema)?,
            SchemaFormat::Yaml => {
                serde_yaml::to_string(&schema).context("Failed to convert schema to YAML")?
            }
        };

        match &self.output {
            Some(path) => {
                fs::write(path, output)
                    .with_context(|| format!("Failed to write schema to: {}", path.display()))?;
                println!("Schema written to: {}", path.display());
            }
            None => println!("{}", output),
        }
        Ok(())
    }
}

/// The schema of `ProjectSpecification` with title and description set.
pub fn spec_schema() -> Result<Value> {
    let mut schema = serde_json::to_value(schema_for!(ProjectSpecification))
        .context("Failed to convert schema to JSON value")?;

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("title".to_string(), Value::String(SCHEMA_TITLE.to_string()));
        obj.insert(
            "description".to_string(),
            Value::String(SCHEMA_DESCRIPTION.to_string()),
        );
    }
    Ok(schema)
}

/// Returns every schema violation in `value`, or an empty list.
pub fn validate_value(value: &Value) -> Result<Vec<String>> {
    let schema = spec_schema()?;
    let compiled = jsonschema::JSONSchema::compile(&schema)
        .map_err(|e| anyhow!("Failed to compile JSON schema: {}", e))?;

    let problems = match compiled.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{}: {}", path, error)
                }
            })
            .collect(),
    };
    Ok(problems)
}

fn validate_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

    let value: Value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML spec: {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON spec: {}", path.display()))?,
    };

    let mut problems = validate_value(&value)?;
    if problems.is_empty() {
        // Schema-valid documents must also load
        if let Err(e) = serde_json::from_value::<ProjectSpecification>(value) {
            problems.push(format!("cannot be loaded: {}", e));
        }
    }
    Ok(problems)
}
