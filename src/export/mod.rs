//! Prompt exports
//!
//! Plain text, structured JSON and Markdown renderings of a specification
//! and its synthesized prompt, plus the file naming used when they are
//! written to disk.

mod json;
mod markdown;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::Catalog;
use crate::errors::PromptResult;
use crate::spec::ProjectSpecification;
use crate::utils::text::string::sanitize_file_stem;

const DEFAULT_FILE_STEM: &str = "prompt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Json, ExportFormat::Markdown];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// `{projectName}.{ext}`, or `prompt.{ext}` when the project has no name.
pub fn export_filename(project_name: &str, format: ExportFormat) -> String {
    let stem = sanitize_file_stem(project_name);
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem.as_str() };
    format!("{}.{}", stem, format.extension())
}

/// Renders the export body. `generated_at` is stamped into the JSON and
/// Markdown documents; the plain text export is the prompt byte for byte.
pub fn render(
    format: ExportFormat,
    spec: &ProjectSpecification,
    prompt: &str,
    catalog: &Catalog,
    generated_at: DateTime<Utc>,
) -> PromptResult<String> {
    Ok(match format {
        ExportFormat::Text => prompt.to_string(),
        ExportFormat::Json => json::render(spec, prompt, generated_at)?,
        ExportFormat::Markdown => markdown::render(spec, prompt, catalog, generated_at),
    })
}

/// Renders and writes the export into `dir`, returning the file path.
pub fn write_export<P: AsRef<Path>>(
    dir: P,
    format: ExportFormat,
    spec: &ProjectSpecification,
    prompt: &str,
    catalog: &Catalog,
) -> PromptResult<PathBuf> {
    let body = render(format, spec, prompt, catalog, Utc::now())?;
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(&spec.project_name, format));
    fs::write(&path, body)?;
    info!("Exported {} prompt to {}", format, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_filenames() {
        assert_eq!(export_filename("Acme", ExportFormat::Text), "Acme.txt");
        assert_eq!(export_filename("", ExportFormat::Json), "prompt.json");
        assert_eq!(export_filename("a/b", ExportFormat::Markdown), "a-b.md");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("MD".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert_eq!("text".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_text_export_is_raw_prompt() {
        let spec = ProjectSpecification::default();
        let body = render(
            ExportFormat::Text,
            &spec,
            "exact\nbytes  \n",
            &Catalog::builtin(),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(body, "exact\nbytes  \n");
    }

    #[test]
    fn test_write_export_to_directory() {
        let dir = tempdir().unwrap();
        let mut spec = ProjectSpecification::default();
        spec.project_name = "Acme".to_string();

        for format in ExportFormat::ALL {
            let path = write_export(dir.path(), format, &spec, "p", &Catalog::builtin()).unwrap();
            assert_eq!(path, dir.path().join(format!("Acme.{}", format.extension())));
            assert!(path.exists());
        }
        assert_eq!(fs::read_to_string(dir.path().join("Acme.txt")).unwrap(), "p");
    }
}
