//! numbox provides a single numeric value object, `Scalar`, designed to live inside
//! a dynamically typed host. A `Scalar` wraps exactly one `f64` and interoperates
//! with the host's native numbers (integers, floats, booleans) as well as with other
//! `Scalar`s across arithmetic, comparison, indexing and iteration.
//!
//! The heart of the crate is the dispatch protocol: every binary operation first
//! runs both operands through the coercion layer, and reports `Unsupported` when one
//! of them cannot be read as a number. `Unsupported` is not an error: it tells the
//! host to retry with the reflected operand's own handler before raising anything.

mod coerce;
mod error;
pub mod log;
mod operand;
mod value;

pub use coerce::{coerce_pair, try_extract, CoercedPair};
pub use error::{ErrKind, Error};
pub use operand::{HostObject, Operand};
pub use value::iter::ScalarIter;
pub use value::ops::{
    binary_op, compare, divmod, inplace_op, inplace_pow, pow, Comparison, Operator, Unsupported,
};
pub use value::{Scalar, ScalarRef};
