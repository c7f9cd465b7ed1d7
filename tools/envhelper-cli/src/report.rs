//! Rendering of lookup results.

use envhelper_core::ValueSource;
use serde::Serialize;

use crate::config::Format;

/// Outcome of a successful `get`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub value: serde_json::Value,
    /// `value` as the type's `Display` renders it.
    #[serde(skip)]
    pub text: String,
    pub source: ValueSource,
}

impl Report {
    pub fn render(&self, format: Format) -> anyhow::Result<String> {
        Ok(match format {
            Format::Text => self.text.clone(),
            Format::Json => serde_json::to_string(self)?,
        })
    }
}
