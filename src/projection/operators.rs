use std::ops::{Add, Div, Mul, Rem, Sub};

use rust_decimal::Decimal;

use super::{Composite, Projection};
use crate::template::Template;
use crate::value::Value;

/// Arithmetic operators over projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Modulo (`%`)
    Modulo,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
        }
    }
}

/// Right-hand side of an arithmetic operator: another projection or a
/// literal that gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Projection(Projection),
    Value(Value),
}

impl Operand {
    pub fn into_projection(self) -> Projection {
        match self {
            Operand::Projection(p) => p,
            Operand::Value(v) => Projection::value(v),
        }
    }
}

impl From<Projection> for Operand {
    fn from(p: Projection) -> Self {
        Operand::Projection(p)
    }
}

impl From<&Projection> for Operand {
    fn from(p: &Projection) -> Self {
        Operand::Projection(p.clone())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

macro_rules! literal_operands {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

literal_operands!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64, Decimal, &str, String
);

impl Projection {
    /// Combines `self` with `right`, keeping `self`'s name.
    pub fn apply(self, op: BinOp, right: impl Into<Operand>) -> Projection {
        let name = self.name();
        let right = right.into().into_projection();
        Projection::Composite(Composite {
            template: Template::binary(op.symbol()),
            children: vec![self, right],
            name: Some(name),
        })
    }

    pub fn plus(self, right: impl Into<Operand>) -> Projection {
        self.apply(BinOp::Add, right)
    }

    pub fn minus(self, right: impl Into<Operand>) -> Projection {
        self.apply(BinOp::Subtract, right)
    }

    pub fn times(self, right: impl Into<Operand>) -> Projection {
        self.apply(BinOp::Multiply, right)
    }

    pub fn divide(self, right: impl Into<Operand>) -> Projection {
        self.apply(BinOp::Divide, right)
    }

    pub fn modulo(self, right: impl Into<Operand>) -> Projection {
        self.apply(BinOp::Modulo, right)
    }
}

macro_rules! operator_traits {
    ($($trait:ident :: $method:ident => $op:expr),*) => {
        $(
            impl<R: Into<Operand>> $trait<R> for Projection {
                type Output = Projection;

                fn $method(self, right: R) -> Projection {
                    self.apply($op, right)
                }
            }
        )*
    };
}

operator_traits!(
    Add::add => BinOp::Add,
    Sub::sub => BinOp::Subtract,
    Mul::mul => BinOp::Multiply,
    Div::div => BinOp::Divide,
    Rem::rem => BinOp::Modulo
);
