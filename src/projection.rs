//! # Projections
//!
//! A [`Projection`] is an expression fragment that can render itself to query
//! text and report a stable name. There are two kinds:
//!
//! - **Atomic** - wraps finished text (a field, a rendered literal, a fixed
//!   marker such as `inV()`). Its name and its rendering are the same text.
//! - **Composite** - a [`Template`] whose `%s` holes are filled, in order, by
//!   child projections.
//!
//! ## Name vs. Rendering
//!
//! Clauses like `GROUP BY` or `ORDER BY` must restate a projection by name.
//! Arithmetic keeps the left operand's name, so a transformed field is still
//! referenced as the field; function calls have no inherited identity and are
//! named by their own rendering.
//!
//! ```
//! use orientqb::Projection;
//! use orientqb::functions::count;
//!
//! let price = Projection::atomic("price");
//! let taxed = price.clone() * 1.2 + 3;
//! assert_eq!(taxed.render(), "price * 1.2 + 3");
//! assert_eq!(taxed.name(), "price");
//!
//! let counted = count(price);
//! assert_eq!(counted.render(), "count(price)");
//! assert_eq!(counted.name(), "count(price)");
//! ```

pub mod operators;

pub use operators::{BinOp, Operand};

use std::fmt;

use crate::output;
use crate::template::{Segment, Template, TemplateError};
use crate::value::Value;

/// An expression node of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Finished text; `name() == render()`
    Atomic(String),

    /// Template filled by child projections
    Composite(Composite),
}

/// A template together with the children that fill its holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    template: Template,
    children: Vec<Projection>,
    /// Identity inherited at construction; `None` means "named by rendering"
    name: Option<String>,
}

impl Composite {
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn children(&self) -> &[Projection] {
        &self.children
    }

    pub fn inherited_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Projection {
    pub fn atomic(text: impl Into<String>) -> Self {
        Projection::Atomic(text.into())
    }

    /// Wraps a literal, already rendered, as an atomic projection.
    ///
    /// ```
    /// use orientqb::Projection;
    ///
    /// assert_eq!(Projection::value("Rome").render(), "'Rome'");
    /// assert_eq!(Projection::value(3).render(), "3");
    /// ```
    pub fn value(value: impl Into<Value>) -> Self {
        Projection::Atomic(output::render(&value.into()))
    }

    /// Builds a function composite.
    ///
    /// # Panics
    ///
    /// Panics when the template is malformed or its hole count differs from
    /// the number of children. Both are defects in the calling builder; use
    /// [`Projection::try_composite`] for templates assembled at runtime.
    pub fn composite<I>(template: &str, children: I) -> Self
    where
        I: IntoIterator<Item = Projection>,
    {
        match Self::try_composite(template, children) {
            Ok(projection) => projection,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a function composite, reporting template defects.
    pub fn try_composite<I>(template: &str, children: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = Projection>,
    {
        let parsed = Template::parse(template)?;
        let children: Vec<Projection> = children.into_iter().collect();
        if parsed.holes() != children.len() {
            return Err(TemplateError::HoleMismatch {
                template: template.to_string(),
                holes: parsed.holes(),
                children: children.len(),
            });
        }
        Ok(Projection::Composite(Composite {
            template: parsed,
            children,
            name: None,
        }))
    }

    /// Fully substituted query text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Identifier used when the projection is restated elsewhere.
    pub fn name(&self) -> String {
        match self {
            Projection::Atomic(text) => text.clone(),
            Projection::Composite(c) => match &c.name {
                Some(name) => name.clone(),
                None => self.render(),
            },
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Projection::Atomic(_))
    }

    // Record attributes

    /// `*`
    pub fn wildcard() -> Self {
        Projection::atomic("*")
    }

    /// `@this`, the current record
    pub fn this() -> Self {
        Projection::atomic("@this")
    }

    /// `@rid`
    pub fn rid() -> Self {
        Projection::atomic("@rid")
    }

    /// `@class`
    pub fn class() -> Self {
        Projection::atomic("@class")
    }

    /// `@version`
    pub fn version() -> Self {
        Projection::atomic("@version")
    }

    /// `@size`
    pub fn size() -> Self {
        Projection::atomic("@size")
    }

    /// `@type`
    pub fn kind() -> Self {
        Projection::atomic("@type")
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Atomic(text) => f.write_str(text),
            Projection::Composite(c) => {
                let mut children = c.children.iter();
                for segment in c.template.segments() {
                    match segment {
                        Segment::Text(text) => f.write_str(text)?,
                        Segment::Hole => {
                            if let Some(child) = children.next() {
                                fmt::Display::fmt(child, f)?;
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
