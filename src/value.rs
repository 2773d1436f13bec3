use std::fmt;

use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::output;

/// A literal that can be embedded in a query fragment.
///
/// Values are never emitted as-is: the [`output`](crate::output) module turns
/// them into their OrientDB literal text (quoted strings, unquoted numbers,
/// comma-separated argument lists).
///
/// # Number Preservation
///
/// Integers, binary floats and decimals are kept apart so that the rendered
/// text reads the way the caller wrote it:
/// - `Integer(5)` renders as `5`
/// - `Float(5.0)` renders as `5.0`
/// - `Decimal` keeps its scale, so `5.00` stays `5.00`
///
/// # Examples
///
/// ```
/// use orientqb::Value;
///
/// assert_eq!(Value::from(5).to_string(), "5");
/// assert_eq!(Value::from(5.0).to_string(), "5.0");
/// assert_eq!(Value::from("O'Brien").to_string(), r"'O\'Brien'");
/// assert_eq!(Value::list(["friend", "colleague"]).to_string(), "'friend', 'colleague'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`
    Null,

    /// `true` / `false`
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// Binary floating-point number
    Float(f64),

    /// Exact decimal number
    Decimal(Decimal),

    /// UTF-8 string, rendered single-quoted
    String(String),

    /// Enumerated identifier (e.g. an edge direction), rendered quoted
    /// exactly as declared
    Label(String),

    /// Variadic argument list, rendered comma-separated without brackets
    List(Vec<Value>),
}

impl Value {
    /// Builds a string literal.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Builds an enumerated identifier literal.
    pub fn label(s: impl Into<String>) -> Self {
        Value::Label(s.into())
    }

    /// Builds an argument list from anything convertible into values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&output::render(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! integer_values {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, u8, u16, u32);

// Types wider than i64 fall back to Decimal, then Float, when out of range
macro_rules! wide_integer_values {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(i) => Value::Integer(i),
                        Err(_) => Decimal::from_i128(n as i128)
                            .map_or(Value::Float(n as f64), Value::Decimal),
                    }
                }
            }
        )*
    };
}

wide_integer_values!(i128, isize, u64, usize);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        // Widen through the shortest decimal form so 5.1f32 stays 5.1
        Value::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Direction> for Value {
    fn from(d: Direction) -> Self {
        Value::Label(d.as_str().to_string())
    }
}

impl From<&DateFormat> for Value {
    fn from(format: &DateFormat) -> Self {
        Value::String(format.pattern().to_string())
    }
}

impl From<&TimeZone> for Value {
    fn from(zone: &TimeZone) -> Self {
        Value::String(zone.id().to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Errors raised when a JSON document has no literal form.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// JSON objects cannot be flattened into a single literal
    UnsupportedObject,

    /// A JSON number that fits neither `i64`, `Decimal` nor `f64`
    UnrepresentableNumber(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::UnsupportedObject => write!(f, "JSON objects have no literal form"),
            ValueError::UnrepresentableNumber(n) => write!(f, "Number {} cannot be represented", n),
        }
    }
}

impl std::error::Error for ValueError {}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Value::Integer(i));
                }
                let text = n.to_string();
                if let Ok(d) = text.parse::<Decimal>() {
                    return Ok(Value::Decimal(d));
                }
                n.as_f64()
                    .map(Value::Float)
                    .ok_or(ValueError::UnrepresentableNumber(text))
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(arr) => arr
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(_) => Err(ValueError::UnsupportedObject),
        }
    }
}

/// Direction of an edge traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Out,
    In,
    Both,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
            Direction::Both => "BOTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date pattern handed through to the database untouched
/// (e.g. `yyyy-MM-dd HH:mm:ss`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        DateFormat(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }
}

/// A time zone identifier (e.g. `Europe/Rome`, `UTC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone(String);

impl TimeZone {
    pub fn new(id: impl Into<String>) -> Self {
        TimeZone(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}
