//! The Error module contains the hard-error channel of numbox. Hard errors are
//! raised for invalid constructions, out of range indexing and unknown attributes.
//! They are distinct from the `Unsupported` dispatch outcome, which is a signal to
//! the host and never a hard error.

use std::fmt::{Display, Formatter};

use colored::Colorize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrKind {
    Type,
    OutOfRange,
    Attribute,
}

impl ErrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrKind::Type => "type",
            ErrKind::OutOfRange => "out of range",
            ErrKind::Attribute => "attribute",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    kind: ErrKind,
    msg: Option<String>,
}

impl Error {
    pub fn new(kind: ErrKind) -> Error {
        Error { kind, msg: None }
    }

    pub fn with_msg(self, msg: String) -> Error {
        Error {
            msg: Some(msg),
            ..self
        }
    }

    /// What kind of error the error is
    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// Display the error on stderr
    pub fn emit(&self) {
        match &self.msg {
            Some(msg) => eprintln!(
                "{}: {}: {}",
                "error".black().on_yellow(),
                self.kind.as_str().yellow(),
                msg
            ),
            None => eprintln!(
                "{}: {}",
                "error".black().on_yellow(),
                self.kind.as_str().yellow()
            ),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kind.as_str())?;
        if let Some(msg) = &self.msg {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
