//! CLI support for orientqb
//!
//! Provides programmatic access to the `oqb` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod literal;
mod target;

pub use literal::{LiteralOptions, execute_literal};
pub use target::{IndexOrder, TargetOptions, execute_target};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// JSON value without a literal form
    Value(crate::ValueError),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// More than one kind of target selector was given
    ConflictingTarget,
    /// `--order` given without `--index`
    OrderWithoutIndex,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Value(e) => write!(f, "Invalid literal: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
            CliError::ConflictingTarget => write!(
                f,
                "Choose one of: class names, --cluster, --index or --nested"
            ),
            CliError::OrderWithoutIndex => write!(f, "--order requires --index"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Value(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<crate::ValueError> for CliError {
    fn from(e: crate::ValueError) -> Self {
        CliError::Value(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
