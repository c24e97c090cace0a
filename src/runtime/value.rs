use std::fmt::{Debug, Display, Error, Formatter};

use crate::{
    core::Container,
    domain::{Exception, HostResult, ValueKind},
    runtime::types::{Class, Method, Module, Object},
};

/// A value in the host object graph.
#[derive(Clone)]
pub enum RuntimeValue {
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    Sym(String),
    Class(Container<Class>),
    Module(Container<Module>),
    Object(Container<Object>),
    Method(Container<Method>),
}

impl RuntimeValue {
    pub fn get_kind(&self) -> ValueKind {
        match self {
            RuntimeValue::Nil => ValueKind::Nil,
            RuntimeValue::Bool(_) => ValueKind::Bool,
            RuntimeValue::Int(_) => ValueKind::Int,
            RuntimeValue::Str(_) => ValueKind::Str,
            RuntimeValue::Sym(_) => ValueKind::Sym,
            RuntimeValue::Class(_) => ValueKind::Class,
            RuntimeValue::Module(_) => ValueKind::Module,
            RuntimeValue::Object(_) => ValueKind::Object,
            RuntimeValue::Method(_) => ValueKind::Method,
        }
    }

    /// The tagged check behind the singleton-method owner resolution: is this value something
    /// that can carry its own name, or must it be dereferenced to its class first?
    pub fn is_class_or_module(&self) -> bool {
        self.get_kind().is_class_or_module()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, RuntimeValue::Nil)
    }

    pub fn as_class(&self) -> HostResult<Container<Class>> {
        match self {
            RuntimeValue::Class(i) => Ok(i.clone()),
            _ => Err(Exception::type_error("Expected a class")),
        }
    }

    pub fn as_module(&self) -> HostResult<Container<Module>> {
        match self {
            RuntimeValue::Module(i) => Ok(i.clone()),
            _ => Err(Exception::type_error("Expected a module")),
        }
    }

    pub fn as_object(&self) -> HostResult<Container<Object>> {
        match self {
            RuntimeValue::Object(i) => Ok(i.clone()),
            _ => Err(Exception::type_error("Expected an object")),
        }
    }

    pub fn as_method(&self) -> HostResult<Container<Method>> {
        match self {
            RuntimeValue::Method(i) => Ok(i.clone()),
            _ => Err(Exception::type_error("Expected a method")),
        }
    }

    pub fn as_str(&self) -> HostResult<String> {
        match self {
            RuntimeValue::Str(i) => Ok(i.clone()),
            _ => Err(Exception::type_error("Expected a string")),
        }
    }

    /// Accept a symbol or a string as a method name, the way the host's reflection entry points
    /// do.
    pub fn as_method_name(&self) -> HostResult<String> {
        match self {
            RuntimeValue::Sym(i) | RuntimeValue::Str(i) => Ok(i.clone()),
            _ => Err(Exception::type_error(format!(
                "{} is not a symbol nor a string",
                self
            ))),
        }
    }
}

impl PartialEq for RuntimeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RuntimeValue::Nil, RuntimeValue::Nil) => true,
            (RuntimeValue::Bool(a), RuntimeValue::Bool(b)) => a == b,
            (RuntimeValue::Int(a), RuntimeValue::Int(b)) => a == b,
            (RuntimeValue::Str(a), RuntimeValue::Str(b)) => a == b,
            (RuntimeValue::Sym(a), RuntimeValue::Sym(b)) => a == b,
            (RuntimeValue::Class(a), RuntimeValue::Class(b)) => a.same_identity(b),
            (RuntimeValue::Module(a), RuntimeValue::Module(b)) => a.same_identity(b),
            (RuntimeValue::Object(a), RuntimeValue::Object(b)) => a.same_identity(b),
            (RuntimeValue::Method(a), RuntimeValue::Method(b)) => a.same_identity(b),
            _ => false,
        }
    }
}

impl Display for RuntimeValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            RuntimeValue::Nil => write!(f, "nil"),
            RuntimeValue::Bool(b) => write!(f, "{}", b),
            RuntimeValue::Int(i) => write!(f, "{}", i),
            RuntimeValue::Str(s) => write!(f, "\"{}\"", s),
            RuntimeValue::Sym(s) => write!(f, ":{}", s),
            RuntimeValue::Class(c) => match c.borrow().name() {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "#<Class:0x{:016x}>", c.address()),
            },
            RuntimeValue::Module(m) => match m.borrow().name() {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "#<Module:0x{:016x}>", m.address()),
            },
            RuntimeValue::Object(o) => {
                let class = o.borrow().class();
                let class_name = class.borrow().name().unwrap_or("?").to_string();
                write!(f, "#<{}:0x{:016x}>", class_name, o.address())
            }
            RuntimeValue::Method(m) => write!(f, "{}", m.borrow()),
        }
    }
}

impl Debug for RuntimeValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self)
    }
}
