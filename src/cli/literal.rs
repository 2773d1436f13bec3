//! Render JSON input as a query literal

use super::CliError;
use crate::{Value, output};

/// Options for the literal command
#[derive(Debug, Clone, Default)]
pub struct LiteralOptions {
    /// JSON input string
    pub input: Option<String>,
    /// Double `%` so the output can be pasted into a projection template
    pub template: bool,
}

/// Parse the JSON input and return its literal text
pub fn execute_literal(options: &LiteralOptions) -> Result<String, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let value = Value::try_from(json_value)?;

    Ok(if options.template {
        output::render_for_template(&value)
    } else {
        output::render(&value)
    })
}
