//! # apidoc-markdown Library
//!
//! Renders the JSON output of [apidoc](https://apidocjs.com) into a single
//! Markdown document:
//!
//! - Loads `api_data.json` and `api_project.json`
//! - Keeps only the entries of the latest semantic version
//! - Groups titled entries by the source file they were documented in
//! - Renders everything through a tera template (bundled or user supplied)
//!
//! ## Usage
//!
//! ### To render a document in memory:
//!
//! ```rust,no_run
//! use apidoc_markdown::apidoc_markdown;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let markdown = apidoc_markdown(
//!         Path::new("doc/api_data.json"),
//!         Path::new("doc/api_project.json"),
//!         None,
//!         None,
//!     )?;
//!     println!("{markdown}");
//!     Ok(())
//! }
//! ```
//!
//! ### To write the document to a file:
//!
//! ```rust,no_run
//! use apidoc_markdown::{Config, run_apidoc_markdown};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_apidoc_markdown(&Config::new("doc", "API.md")).await
//! }
//! ```

pub mod cli;
pub mod entry;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod sections;
pub mod template;
pub mod version;

pub use cli::Config;
pub use entry::Entry;
pub use error::{Error, Result};
pub use sections::{Sections, build_sections};
pub use template::{DEFAULT_TEMPLATE, RenderContext, Template, TeraTemplate};
pub use version::{latest_version, latest_version_entries};

use anyhow::Context;
use log::{debug, info};
use serde_json::Value;
use std::path::Path;

/// Renders the apidoc output at `data_path` and `project_path` to markdown.
///
/// Inputs are read in order: template, data, project, prepend. The bundled
/// [`DEFAULT_TEMPLATE`] is used when `template_path` is `None`.
pub fn apidoc_markdown(
    data_path: &Path,
    project_path: &Path,
    template_path: Option<&Path>,
    prepend_path: Option<&Path>,
) -> Result<String> {
    let template = match template_path {
        Some(path) => loader::read_parse(path, TeraTemplate::compile)?,
        None => TeraTemplate::default_template().map_err(Error::DefaultTemplate)?,
    };
    let data: Vec<Entry> = loader::read_json(data_path)?;
    let project: Value = loader::read_json(project_path)?;
    let prepend = prepend_path.map(loader::read).transpose()?;

    render_document(&template, &data, &project, prepend.as_deref())
}

/// Selects the latest entries, groups them and renders `template`.
pub fn render_document(
    template: &dyn Template,
    data: &[Entry],
    project: &Value,
    prepend: Option<&str>,
) -> Result<String> {
    let latest = latest_version_entries(data);
    let grouped = build_sections(&latest);
    debug!(
        "{} of {} entries in the latest version, {} files, {} sections",
        latest.len(),
        data.len(),
        grouped.files.len(),
        grouped.sections.len()
    );

    template.render(&RenderContext {
        data,
        project,
        prepend,
        files: &grouped.files,
        sections: &grouped.sections,
    })
}

/// Renders the document described by `config` and writes it to its output path.
pub async fn run_apidoc_markdown(config: &Config) -> anyhow::Result<()> {
    let markdown = apidoc_markdown(
        &config.data_path,
        &config.project_path,
        config.template_path.as_deref(),
        config.prepend_path.as_deref(),
    )?;

    tokio::fs::write(&config.output_path, markdown)
        .await
        .with_context(|| format!("Failed to write output: {}", config.output_path.display()))?;

    info!("Wrote: {}", config.output_path.display());
    Ok(())
}
