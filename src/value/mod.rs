//! A `Scalar` is the value object at the center of numbox: one mutable double
//! precision field behind a shared handle. Identity is distinct from value: two
//! `Scalar`s holding equal fields compare equal but remain different objects, and
//! in-place operators mutate the existing object rather than allocating a new one.
//!
//! The target host is single threaded per call and owns objects through reference
//! counting, so handles are `Rc` and the field lives in a `Cell`.

use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::coerce::try_extract;
use crate::error::{ErrKind, Error};
use crate::operand::Operand;

pub mod iter;
pub mod ops;

/// Value returned when the reserved `secret` attribute is read, independent of
/// the instance's own field
const SECRET: f64 = std::f64::consts::PI;

#[derive(Debug)]
pub struct Scalar {
    value: Cell<f64>,
}

/// A shared handle on a `Scalar`. Cloning the handle increments the share count;
/// the object itself is never copied implicitly
pub type ScalarRef = Rc<Scalar>;

impl Scalar {
    /// Create a new `Scalar` holding 0.0
    pub fn new() -> ScalarRef {
        Scalar::from_f64(0.0)
    }

    pub fn from_f64(value: f64) -> ScalarRef {
        Rc::new(Scalar {
            value: Cell::new(value),
        })
    }

    /// Construct from anything the host can pass. A non-coercible argument is a
    /// hard type error naming the offending type
    pub fn try_from_operand(operand: &Operand) -> Result<ScalarRef, Error> {
        match try_extract(operand) {
            Some(v) => Ok(Scalar::from_f64(v)),
            None => Err(Error::new(ErrKind::Type).with_msg(format!(
                "invalid argument type for Scalar(): '{}'",
                operand.type_name()
            ))),
        }
    }

    pub fn get(&self) -> f64 {
        self.value.get()
    }

    pub(crate) fn store(&self, value: f64) {
        self.value.set(value);
    }

    /// A `Scalar` viewed as a sequence always has exactly one element
    pub fn len(&self) -> usize {
        1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read through the indexed view. Only index 0 is valid
    pub fn get_item(&self, index: isize) -> Result<f64, Error> {
        match index {
            0 => Ok(self.get()),
            _ => Err(Error::new(ErrKind::OutOfRange)
                .with_msg(format!("index {index} out of range for Scalar"))),
        }
    }

    /// Write through the indexed view. A non-numeric value is a hard type error,
    /// a bad index an out of range error
    pub fn set_item(&self, index: isize, value: &Operand) -> Result<(), Error> {
        let v = try_extract(value).ok_or_else(|| {
            Error::new(ErrKind::Type).with_msg(format!(
                "must be a real number, not '{}'",
                value.type_name()
            ))
        })?;

        match index {
            0 => {
                self.store(v);
                Ok(())
            }
            _ => Err(Error::new(ErrKind::OutOfRange)
                .with_msg(format!("index {index} out of range for Scalar"))),
        }
    }

    /// Membership test of the indexed view. An incompatible candidate is simply
    /// not a member, never an error
    pub fn contains(&self, candidate: &Operand) -> bool {
        match try_extract(candidate) {
            Some(v) => v == self.get(),
            None => false,
        }
    }

    /// Attribute reads. The reserved name `secret` resolves to a well known
    /// mathematical constant instead of any stored field; `value` resolves to
    /// the field itself
    pub fn attribute(&self, name: &str) -> Result<f64, Error> {
        match name {
            "secret" => Ok(SECRET),
            "value" => Ok(self.get()),
            _ => Err(Error::new(ErrKind::Attribute)
                .with_msg(format!("Scalar has no attribute '{name}'"))),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// Render the field the way C's `%g` would: at most `sig` significant digits,
/// trailing zeroes trimmed, exponent notation outside the comfortable range
fn format_sig(v: f64, sig: usize) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    if !v.is_finite() {
        return v.to_string();
    }

    let exponent = v.abs().log10().floor() as i32;

    if exponent < -4 || exponent >= sig as i32 {
        let formatted = format!("{:.*e}", sig - 1, v);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{exp}")
            }
            None => formatted,
        }
    } else {
        let precision = (sig as i32 - 1 - exponent).max(0) as usize;
        let formatted = format!("{v:.precision$}");
        match formatted.contains('.') {
            true => formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
            false => formatted,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Scalar( {:>12} )", format_sig(self.get(), 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_default_construction_is_zero() {
        assert_eq!(Scalar::new().get(), 0.0);
    }

    #[test]
    fn t_construction_from_coercible_operands() {
        assert_eq!(Scalar::try_from_operand(&Operand::Int(3)).unwrap().get(), 3.0);
        assert_eq!(
            Scalar::try_from_operand(&Operand::Bool(true)).unwrap().get(),
            1.0
        );

        let other = Scalar::from_f64(2.5);
        assert_eq!(
            Scalar::try_from_operand(&Operand::Scalar(other)).unwrap().get(),
            2.5
        );
    }

    #[test]
    fn t_construction_from_incompatible_operand() {
        let err = Scalar::try_from_operand(&Operand::from("nope")).unwrap_err();

        assert_eq!(err.kind(), ErrKind::Type);
        assert!(err.to_string().contains("'str'"));
    }

    #[test]
    fn t_equal_by_value_distinct_by_identity() {
        let a = Scalar::from_f64(1.5);
        let b = Scalar::from_f64(1.5);

        assert_eq!(a, b);
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn t_len_is_always_one() {
        let s = Scalar::from_f64(42.0);

        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn t_index_zero_reads_and_writes() {
        let s = Scalar::from_f64(5.0);

        assert_eq!(s.get_item(0).unwrap(), 5.0);

        s.set_item(0, &Operand::Int(9)).unwrap();
        assert_eq!(s.get(), 9.0);
    }

    #[test]
    fn t_index_out_of_range() {
        let s = Scalar::from_f64(5.0);

        assert_eq!(s.get_item(1).unwrap_err().kind(), ErrKind::OutOfRange);
        assert_eq!(s.get_item(-1).unwrap_err().kind(), ErrKind::OutOfRange);
        assert_eq!(
            s.set_item(1, &Operand::Int(0)).unwrap_err().kind(),
            ErrKind::OutOfRange
        );
    }

    #[test]
    fn t_set_item_rejects_non_numeric() {
        let s = Scalar::from_f64(5.0);
        let err = s.set_item(0, &Operand::from("text")).unwrap_err();

        assert_eq!(err.kind(), ErrKind::Type);
        assert!(err.to_string().contains("'str'"));
        // the field is untouched on failure
        assert_eq!(s.get(), 5.0);
    }

    #[test]
    fn t_contains_is_scalar_equality() {
        let s = Scalar::from_f64(5.0);

        assert!(s.contains(&Operand::Int(5)));
        assert!(s.contains(&Operand::Float(5.0)));
        assert!(!s.contains(&Operand::Float(4.0)));
        assert!(!s.contains(&Operand::from("5.0")));
    }

    #[test]
    fn t_secret_attribute_is_pi() {
        let s = Scalar::from_f64(5.0);

        assert_eq!(s.attribute("secret").unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn t_value_attribute_reads_the_field() {
        let s = Scalar::from_f64(5.0);

        assert_eq!(s.attribute("value").unwrap(), 5.0);
    }

    #[test]
    fn t_unknown_attribute_is_an_error() {
        let s = Scalar::from_f64(5.0);

        assert_eq!(s.attribute("nope").unwrap_err().kind(), ErrKind::Attribute);
    }

    #[test]
    fn t_display_is_fixed_width() {
        assert_eq!(Scalar::from_f64(3.5).to_string(), "Scalar(          3.5 )");
        assert_eq!(Scalar::from_f64(0.0).to_string(), "Scalar(            0 )");
        assert_eq!(
            Scalar::from_f64(1024.0).to_string(),
            "Scalar(         1024 )"
        );
    }

    #[test]
    fn t_format_sig_rounds_to_six_digits() {
        assert_eq!(format_sig(std::f64::consts::PI, 6), "3.14159");
        assert_eq!(format_sig(-2.5, 6), "-2.5");
        assert_eq!(format_sig(10_000_000.0, 6), "1e7");
        assert_eq!(format_sig(0.00001, 6), "1e-5");
    }
}
