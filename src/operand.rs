//! An Operand is the raw handle the host hands to the dispatch layer. It is a
//! closed classification of everything a host expression can evaluate to: the
//! host's native numerics, strings, other `Scalar` instances, and foreign host
//! objects. Foreign objects may expose the host's generic float-conversion
//! capability through the `HostObject` trait.

use std::fmt;
use std::rc::Rc;

use downcast_rs::{impl_downcast, Downcast};

use crate::value::ScalarRef;

/// A foreign object owned by the host. The only capability the dispatch layer
/// cares about is `as_f64`, the host's numeric conversion callback. Hosts that
/// need their concrete type back can downcast through the `Downcast` supertrait.
pub trait HostObject: Downcast {
    /// Host-visible name of the object's type, used when formatting errors
    fn type_name(&self) -> &'static str;

    /// Attempt the host's float conversion. A failing conversion returns `None`;
    /// it is never propagated as an error
    fn as_f64(&self) -> Option<f64> {
        None
    }
}

impl_downcast!(HostObject);

#[derive(Clone)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Scalar(ScalarRef),
    Object(Rc<dyn HostObject>),
}

impl Operand {
    /// Name of the operand's type as the host spells it
    pub fn type_name(&self) -> &str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Bool(_) => "bool",
            Operand::Str(_) => "str",
            Operand::Scalar(_) => "Scalar",
            Operand::Object(obj) => obj.type_name(),
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "Int({i})"),
            Operand::Float(v) => write!(f, "Float({v})"),
            Operand::Bool(b) => write!(f, "Bool({b})"),
            Operand::Str(s) => write!(f, "Str({s:?})"),
            Operand::Scalar(s) => write!(f, "Scalar({})", s.get()),
            Operand::Object(obj) => write!(f, "Object({})", obj.type_name()),
        }
    }
}

impl From<i64> for Operand {
    fn from(i: i64) -> Operand {
        Operand::Int(i)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Operand {
        Operand::Float(v)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Operand {
        Operand::Bool(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Operand {
        Operand::Str(s.to_string())
    }
}

impl From<ScalarRef> for Operand {
    fn from(s: ScalarRef) -> Operand {
        Operand::Scalar(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    struct Celsius(f64);

    impl HostObject for Celsius {
        fn type_name(&self) -> &'static str {
            "Celsius"
        }

        fn as_f64(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    #[test]
    fn t_type_names() {
        assert_eq!(Operand::from(1i64).type_name(), "int");
        assert_eq!(Operand::from(1.5).type_name(), "float");
        assert_eq!(Operand::from(true).type_name(), "bool");
        assert_eq!(Operand::from("hello").type_name(), "str");
        assert_eq!(Operand::from(Scalar::from_f64(0.0)).type_name(), "Scalar");
        assert_eq!(
            Operand::Object(Rc::new(Celsius(21.0))).type_name(),
            "Celsius"
        );
    }

    #[test]
    fn t_downcast_recovers_concrete_object() {
        let obj: Rc<dyn HostObject> = Rc::new(Celsius(21.0));

        let celsius: &Celsius = obj.downcast_ref().unwrap();

        assert_eq!(celsius.0, 21.0);
    }
}
