pub mod functions;
pub mod output;
pub mod projection;
pub mod target;
pub mod template;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use output::{join, render};
pub use projection::{BinOp, Composite, Operand, Projection};
pub use target::Target;
pub use template::{Template, TemplateError};
pub use value::{DateFormat, Direction, TimeZone, Value, ValueError};
