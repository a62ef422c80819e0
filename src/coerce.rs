//! The coercion layer classifies an operand as native numeric, `Scalar` instance
//! or incompatible, and extracts a double precision scalar from the first two
//! kinds. Every operator in the dispatch layer is built on top of it, so a given
//! operand is always read the same way no matter which operator sees it first.

use crate::log;
use crate::operand::Operand;

/// Two raw scalars extracted from two operands, alive for the duration of one
/// binary operation
pub type CoercedPair = (f64, f64);

/// Extract a double from an operand. Returns `None` when the operand is not
/// compatible, which callers translate into the "not supported" dispatch outcome.
/// Never mutates the operand.
pub fn try_extract(operand: &Operand) -> Option<f64> {
    match operand {
        Operand::Scalar(s) => Some(s.get()),
        Operand::Int(i) => Some(*i as f64),
        Operand::Float(v) => Some(*v),
        Operand::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        // The host's conversion callback; a failed attempt is suppressed
        Operand::Object(obj) => obj.as_f64(),
        Operand::Str(_) => None,
    }
}

/// Coerce both operands of a binary operation. Both succeed or the pair is `None`
pub fn coerce_pair(lhs: &Operand, rhs: &Operand) -> Option<CoercedPair> {
    let pair = (try_extract(lhs)?, try_extract(rhs)?);
    log!(coerce, "({:?}, {:?}) -> ({}, {})", lhs, rhs, pair.0, pair.1);

    Some(pair)
}
