//! Operator dispatch for `Scalar`. Every operation is stateless given its
//! operands: binary operators run both sides through the coercion layer, compute
//! in double precision and wrap the result in a fresh object. When one side
//! cannot be coerced the operation answers `Unsupported`, a tri-state outcome the
//! host interprets as "try the reflected operand's handler before raising".
//!
//! Dispatch is symmetric: `scalar + native` and `native + scalar` go through the
//! exact same path. In-place forms mutate the left operand and hand back the same
//! identity with an extra share, never a fresh allocation.

use std::rc::Rc;

use crate::coerce::{coerce_pair, try_extract};
use crate::log;
use crate::operand::Operand;
use crate::value::{Scalar, ScalarRef};

/// The "not supported" dispatch outcome. Not an error: a caller receiving this
/// from `a OP b` is expected to attempt `b REFLECTED_OP a` before concluding the
/// operation is illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported;

/// All the binary arithmetic operators available
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
}

impl Operator {
    /// Create a new operator from its host spelling
    pub fn new(op_str: &str) -> Operator {
        match op_str {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::TrueDiv,
            "//" => Operator::FloorDiv,
            "%" => Operator::Mod,
            _ => unreachable!("Invalid operator: {}", op_str),
        }
    }

    /// Return the operator's representation
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::TrueDiv => "/",
            Operator::FloorDiv => "//",
            Operator::Mod => "%",
        }
    }

    // Division by zero follows IEEE: inf or NaN, never an error. Mod keeps the
    // sign of the left operand, like C's fmod
    fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::TrueDiv => a / b,
            Operator::FloorDiv => (a / b).floor(),
            Operator::Mod => a % b,
        }
    }
}

/// All the comparison operators available
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Comparison {
    pub fn as_str(&self) -> &str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }
}

impl Scalar {
    /// The host expression `-self`
    pub fn neg(&self) -> ScalarRef {
        Scalar::from_f64(-self.get())
    }

    /// The host expression `+self`
    pub fn pos(&self) -> ScalarRef {
        Scalar::from_f64(self.get())
    }

    /// The host expression `abs(self)`
    pub fn abs(&self) -> ScalarRef {
        Scalar::from_f64(self.get().abs())
    }
}

/// Compute `lhs OP rhs` out-of-place. Either operand may be the `Scalar`;
/// the result is always a fresh object
pub fn binary_op(op: Operator, lhs: &Operand, rhs: &Operand) -> Result<ScalarRef, Unsupported> {
    let (a, b) = coerce_pair(lhs, rhs).ok_or(Unsupported)?;
    log!(dispatch, "{} {} {}", a, op.as_str(), b);

    Ok(Scalar::from_f64(op.apply(a, b)))
}

/// The host's combined divide-modulo. The two halves are computed independently;
/// the remainder is the same `fmod` the `%` operator produces, so the identity
/// `a == b * quotient + remainder` does not hold when the operands' signs differ
pub fn divmod(lhs: &Operand, rhs: &Operand) -> Result<(ScalarRef, ScalarRef), Unsupported> {
    Ok((
        binary_op(Operator::FloorDiv, lhs, rhs)?,
        binary_op(Operator::Mod, lhs, rhs)?,
    ))
}

/// The host's ternary power. Without a modulus the result is `base ^ exponent`;
/// with one it is `fmod(base ^ exponent, modulus)`. A modulus that cannot be
/// coerced makes the whole operation unsupported
pub fn pow(
    base: &Operand,
    exponent: &Operand,
    modulus: Option<&Operand>,
) -> Result<ScalarRef, Unsupported> {
    let (b, e) = coerce_pair(base, exponent).ok_or(Unsupported)?;

    match modulus {
        None => Ok(Scalar::from_f64(b.powf(e))),
        Some(m) => {
            let m = try_extract(m).ok_or(Unsupported)?;
            Ok(Scalar::from_f64(b.powf(e) % m))
        }
    }
}

/// Compute `lhs OP= rhs`: the out-of-place result overwrites the left operand's
/// field and the same identity is returned with an extra share. An unsupported
/// computation propagates unchanged and mutates nothing
pub fn inplace_op(op: Operator, lhs: &ScalarRef, rhs: &Operand) -> Result<ScalarRef, Unsupported> {
    let out = binary_op(op, &Operand::Scalar(Rc::clone(lhs)), rhs)?;
    lhs.store(out.get());

    Ok(Rc::clone(lhs))
}

/// `lhs **= rhs`. The host protocol never supplies a modulus for the in-place form
pub fn inplace_pow(lhs: &ScalarRef, exponent: &Operand) -> Result<ScalarRef, Unsupported> {
    let out = pow(&Operand::Scalar(Rc::clone(lhs)), exponent, None)?;
    lhs.store(out.get());

    Ok(Rc::clone(lhs))
}

/// Compare a `Scalar` with any operand. When the right side cannot be coerced,
/// equality degrades to false and inequality to true, while ordering comparisons
/// are unsupported. NaN follows IEEE: every relational and equality comparison is
/// false, inequality is true
pub fn compare(comp: Comparison, lhs: &Scalar, rhs: &Operand) -> Result<bool, Unsupported> {
    let b = match try_extract(rhs) {
        Some(b) => b,
        None => {
            return match comp {
                Comparison::Equal => Ok(false),
                Comparison::NotEqual => Ok(true),
                _ => Err(Unsupported),
            }
        }
    };
    let a = lhs.get();
    log!(dispatch, "{} {} {}", a, comp.as_str(), b);

    Ok(match comp {
        Comparison::Equal => a == b,
        Comparison::NotEqual => a != b,
        Comparison::LessThan => a < b,
        Comparison::LessOrEqual => a <= b,
        Comparison::GreaterThan => a > b,
        Comparison::GreaterOrEqual => a >= b,
    })
}
