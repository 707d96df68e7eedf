/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::account::AccountRecord;
use crate::presentation::format::{format_quota, format_rate};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Name the page template is registered under; the `.html` suffix turns on auto-escaping
pub const TEMPLATE_NAME: &str = "index.html";

const DEFAULT_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Everything the page template can see
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Line status to display
    pub info: AccountRecord,
    /// Base64 PNG of the upload history graph, when the metrics backend provided one
    pub upload_image: Option<String>,
    /// Base64 PNG of the download history graph
    pub download_image: Option<String>,
    /// When the page was generated
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Creates a report without graphs, stamped now
    pub fn new(info: AccountRecord) -> Self {
        Self {
            info,
            upload_image: None,
            download_image: None,
            generated_at: Utc::now(),
        }
    }
}

/// Renders [`Report`]s into the HTML status page
///
/// The template gets two functions, `formatRate` and `formatQuota`, wrapping
/// [`format_rate`] and [`format_quota`].
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the built-in page template
    pub fn new() -> Result<Self, AppError> {
        Self::with_source(DEFAULT_TEMPLATE.to_string())
    }

    /// Creates a renderer from a template file, read once
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        debug!("Loading page template from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::with_source(source)
    }

    /// Creates a renderer from template source; fails on syntax errors
    pub fn with_source(source: String) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_function("formatRate", rate_function);
        env.add_function("formatQuota", quota_function);
        env.add_template_owned(TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    /// Renders the page for one report
    pub fn render(&self, report: &Report) -> Result<String, AppError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(report)?)
    }
}

fn rate_function(value: Value) -> String {
    format_rate(&value_text(&value))
}

fn quota_function(value: Value) -> String {
    format_quota(&value_text(&value))
}

// Undefined and none render as unknown, anything else through its text form.
fn value_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None if value.is_undefined() || value.is_none() => String::new(),
        None => value.to_string(),
    }
}
