//! Compiling and rendering the markdown template.
//!
//! The pipeline only depends on the [`Template`] trait. [`TeraTemplate`] is
//! the implementation used for both the bundled [`DEFAULT_TEMPLATE`] and any
//! user supplied template file.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::helpers;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use tera::{Context, Tera};

/// Template used when no template path is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.md");

/// Name the template is registered under. The `.md` suffix keeps tera's HTML
/// autoescaping off.
const TEMPLATE_NAME: &str = "apidoc.md";

/// Everything a template can see.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    /// The unfiltered content of `api_data.json`.
    pub data: &'a [Entry],
    pub project: &'a Value,
    pub prepend: Option<&'a str>,
    pub files: &'a [String],
    pub sections: &'a IndexMap<String, Vec<Entry>>,
}

/// A compiled template that turns a [`RenderContext`] into text.
pub trait Template {
    fn render(&self, context: &RenderContext<'_>) -> Result<String>;
}

/// A template compiled with tera, with the helpers registered.
pub struct TeraTemplate {
    tera: Tera,
}

impl TeraTemplate {
    /// Compiles `source`. Syntax errors surface here, before any rendering.
    pub fn compile(source: &str) -> tera::Result<Self> {
        let mut tera = Tera::default();
        helpers::register(&mut tera);
        tera.add_raw_template(TEMPLATE_NAME, source)?;

        debug!("Compiled template ({} bytes)", source.len());
        Ok(Self { tera })
    }

    /// Compiles the bundled template.
    pub fn default_template() -> tera::Result<Self> {
        Self::compile(DEFAULT_TEMPLATE)
    }
}

impl Template for TeraTemplate {
    fn render(&self, context: &RenderContext<'_>) -> Result<String> {
        let context = Context::from_serialize(context).map_err(Error::Render)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(Error::Render)
    }
}
