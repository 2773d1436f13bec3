//! Literal rendering for OrientDB query fragments.
//!
//! This module turns [`Value`]s into the text the database expects inside a
//! query: quoted and escaped strings, unquoted numbers and booleans, and
//! comma-separated argument lists.
//!
//! # Features
//!
//! - **Quoting** - strings, labels, date patterns and zone ids are single-quoted
//! - **Escaping** - embedded `\` becomes `\\`, then `'` becomes `\'`
//! - **Template safety** - [`render_for_template()`] also doubles `%` so the
//!   text can be baked into a projection template
//! - **Number preservation** - integers, floats and decimals keep their shape
//!
//! # Examples
//!
//! ```
//! use orientqb::Value;
//! use orientqb::output::{render, render_for_template, join};
//!
//! assert_eq!(render(&Value::from("it's")), r"'it\'s'");
//! assert_eq!(render_for_template(&Value::from("100%")), "'100%%'");
//! assert_eq!(join([1, 2, 3]), "1, 2, 3");
//! ```

use std::fmt::Display;

use crate::value::Value;

/// Separator used for every argument list the builder emits.
pub const LIST_SEPARATOR: &str = ", ";

pub struct LiteralPrinter {
    template: bool,
}

impl LiteralPrinter {
    /// `template` selects whether `%` is doubled in quoted text.
    pub fn new(template: bool) -> Self {
        LiteralPrinter { template }
    }

    pub fn print(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => format_float(*n),
            Value::Decimal(d) => d.to_string(),
            Value::String(s) | Value::Label(s) => self.quote(s),
            Value::List(items) => items
                .iter()
                .map(|v| self.print(v))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
        }
    }

    fn quote(&self, s: &str) -> String {
        let escaped = if self.template {
            escape_template(s)
        } else {
            escape_string(s)
        };
        format!("'{}'", escaped)
    }
}

// Magnitudes outside this range switch to exponent form (`1e300`)
const EXPONENT_BELOW: f64 = 1e-7;
const EXPONENT_FROM: f64 = 1e16;

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&n.abs()) {
        format!("{:e}", n)
    } else if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

/// Escapes backslashes, then single quotes, for use inside a quoted literal.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Doubles `%` and then escapes single quotes, for text that becomes part of
/// a projection template rather than a substituted child.
pub fn escape_template(s: &str) -> String {
    escape_string(&s.replace('%', "%%"))
}

// Convenience functions

/// Renders a value as query literal text.
///
/// # Examples
///
/// ```
/// use orientqb::{Direction, Value};
/// use orientqb::output::render;
///
/// assert_eq!(render(&Value::from(true)), "true");
/// assert_eq!(render(&Value::from(5.1)), "5.1");
/// assert_eq!(render(&Value::from(Direction::Out)), "'OUT'");
/// ```
pub fn render(value: &Value) -> String {
    LiteralPrinter::new(false).print(value)
}

/// Renders a value whose text will be embedded directly in a template.
pub fn render_for_template(value: &Value) -> String {
    LiteralPrinter::new(true).print(value)
}

/// Joins already-renderable items with [`LIST_SEPARATOR`].
pub fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Renders each string as a quoted literal and joins them (edge labels,
/// class names used as arguments).
pub fn join_quoted<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render(&Value::List(
        items
            .into_iter()
            .map(|s| Value::string(s.as_ref()))
            .collect(),
    ))
}
