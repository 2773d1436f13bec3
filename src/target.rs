//! Query targets: what a statement reads from.

use std::fmt;

use crate::output;

/// A finished `FROM` selector.
///
/// ```
/// use orientqb::Target;
///
/// assert_eq!(Target::default().render(), "V");
/// assert_eq!(Target::classes(["Person", "Company"]).render(), "Person, Company");
/// assert_eq!(Target::cluster(3).render(), "cluster:3");
/// assert_eq!(Target::index_values_desc("Person.name").render(), "indexvaluesdesc:Person.name");
/// assert_eq!(Target::nested(&"select from V").render(), "(select from V)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    pub fn new(target: impl Into<String>) -> Self {
        Target(target.into())
    }

    pub fn classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Target(output::join(classes.into_iter().map(|c| c.as_ref().to_string())))
    }

    pub fn cluster(cluster: i32) -> Self {
        Target(format!("cluster:{}", cluster))
    }

    pub fn index_values(index: &str) -> Self {
        Target(format!("indexvalues:{}", index))
    }

    pub fn index_values_asc(index: &str) -> Self {
        Target(format!("indexvaluesasc:{}", index))
    }

    pub fn index_values_desc(index: &str) -> Self {
        Target(format!("indexvaluesdesc:{}", index))
    }

    /// Wraps a complete statement as a subquery target.
    pub fn nested(statement: &impl fmt::Display) -> Self {
        Target(format!("({})", statement))
    }

    pub fn render(&self) -> String {
        self.0.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Target {
    /// All vertices.
    fn default() -> Self {
        Target::new("V")
    }
}

impl From<&str> for Target {
    fn from(target: &str) -> Self {
        Target::new(target)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
