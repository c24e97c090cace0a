mod error;

pub use error::{Exception, ExceptionKind, HostResult};

use std::fmt::{Display, Error, Formatter};

/// The closed set of value kinds the host exposes. Reflection code branches on this rather than
/// on anything dynamic: a value is a class, a module, or something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Str,
    Sym,
    Class,
    Module,
    Object,
    Method,
}

impl ValueKind {
    pub fn is_class_or_module(&self) -> bool {
        matches!(self, ValueKind::Class | ValueKind::Module)
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let name = match self {
            ValueKind::Nil => "NilClass",
            ValueKind::Bool => "Boolean",
            ValueKind::Int => "Integer",
            ValueKind::Str => "String",
            ValueKind::Sym => "Symbol",
            ValueKind::Class => "Class",
            ValueKind::Module => "Module",
            ValueKind::Object => "Object",
            ValueKind::Method => "Method",
        };
        write!(f, "{}", name)
    }
}
