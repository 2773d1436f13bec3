//! Projection templates.
//!
//! A template is literal text with positional `%s` holes. `%%` stands for a
//! literal percent sign; any other `%` sequence is malformed.
//!
//! ```
//! use orientqb::Template;
//!
//! let template = Template::parse("ifnull(%s, '100%%')").unwrap();
//! assert_eq!(template.holes(), 1);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?s:.)?").expect("directive pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment {
    Text(String),
    Hole,
}

/// A parsed template: literal segments interleaved with holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
    holes: usize,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut last = 0;

        for m in DIRECTIVE.find_iter(source) {
            text.push_str(&source[last..m.start()]);
            last = m.end();
            match m.as_str() {
                "%s" => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Hole);
                }
                "%%" => text.push('%'),
                _ => {
                    return Err(TemplateError::DanglingPercent {
                        template: source.to_string(),
                        position: m.start(),
                    });
                }
            }
        }
        text.push_str(&source[last..]);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        let holes = segments.iter().filter(|s| **s == Segment::Hole).count();
        Ok(Template { segments, holes })
    }

    /// `%s <symbol> %s`, built without going through the parser.
    pub(crate) fn binary(symbol: &str) -> Self {
        Template {
            segments: vec![
                Segment::Hole,
                Segment::Text(format!(" {} ", symbol)),
                Segment::Hole,
            ],
            holes: 2,
        }
    }

    pub fn holes(&self) -> usize {
        self.holes
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// A template that cannot be combined with the children it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// Hole count and child count differ
    HoleMismatch {
        template: String,
        holes: usize,
        children: usize,
    },

    /// A `%` not followed by `s` or `%`
    DanglingPercent { template: String, position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::HoleMismatch {
                template,
                holes,
                children,
            } => write!(
                f,
                "Template \"{}\" has {} hole(s) but {} child(ren) were given",
                template, holes, children
            ),
            TemplateError::DanglingPercent { template, position } => write!(
                f,
                "Template \"{}\" has a stray '%' at byte {}",
                template, position
            ),
        }
    }
}

impl std::error::Error for TemplateError {}
