//! Build a target selector from command-line flags

use super::CliError;
use crate::Target;

/// Ordering of an index-values target
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IndexOrder {
    Asc,
    Desc,
}

/// Options for the target command
#[derive(Debug, Clone, Default)]
pub struct TargetOptions {
    /// Class names; empty means "not a class target"
    pub classes: Vec<String>,
    pub cluster: Option<i32>,
    pub index: Option<String>,
    pub order: Option<IndexOrder>,
    /// Full text of a statement to use as a subquery
    pub nested: Option<String>,
}

/// Resolve the options into exactly one target; no selector yields `V`
pub fn execute_target(options: &TargetOptions) -> Result<Target, CliError> {
    let selectors = [
        !options.classes.is_empty(),
        options.cluster.is_some(),
        options.index.is_some(),
        options.nested.is_some(),
    ];
    if selectors.iter().filter(|given| **given).count() > 1 {
        return Err(CliError::ConflictingTarget);
    }
    if options.order.is_some() && options.index.is_none() {
        return Err(CliError::OrderWithoutIndex);
    }

    if let Some(cluster) = options.cluster {
        return Ok(Target::cluster(cluster));
    }
    if let Some(index) = &options.index {
        return Ok(match options.order {
            None => Target::index_values(index),
            Some(IndexOrder::Asc) => Target::index_values_asc(index),
            Some(IndexOrder::Desc) => Target::index_values_desc(index),
        });
    }
    if let Some(statement) = &options.nested {
        return Ok(Target::nested(statement));
    }
    if !options.classes.is_empty() {
        return Ok(Target::classes(&options.classes));
    }
    Ok(Target::default())
}
