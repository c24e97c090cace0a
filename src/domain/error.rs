use std::fmt::{Display, Error, Formatter};

/// The exception kinds the host runtime can raise. These mirror the host's own error taxonomy;
/// no crate-specific wrapping is layered on top.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ExceptionKind {
    TypeError,
    NoMethodError,
    NameError,
    ArgumentError,
}

impl ExceptionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TypeError => "TypeError",
            Self::NoMethodError => "NoMethodError",
            Self::NameError => "NameError",
            Self::ArgumentError => "ArgumentError",
        }
    }
}

pub type HostResult<T> = Result<T, Exception>;

/// A raised host exception. The payload carries the message fragments; formatting into the
/// host's conventional wording happens in `Display`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Exception {
    pub kind: ExceptionKind,
    pub payload: Vec<String>,
}

impl Exception {
    pub fn new(kind: ExceptionKind, payload: Vec<String>) -> Self {
        Self { kind, payload }
    }

    fn new_from_str(kind: ExceptionKind, msg: impl Into<String>) -> Self {
        Self::new(kind, vec![msg.into()])
    }

    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::new_from_str(ExceptionKind::TypeError, msg)
    }

    pub fn cant_define_singleton() -> Self {
        Self::type_error("can't define singleton")
    }

    pub fn no_method_error(method: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(
            ExceptionKind::NoMethodError,
            vec![method.into(), class.into()],
        )
    }

    pub fn undefined_method(method: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(ExceptionKind::NameError, vec![method.into(), class.into()])
    }

    pub fn uninitialized_constant(name: impl Into<String>) -> Self {
        Self::new_from_str(ExceptionKind::NameError, name)
    }

    pub fn argument_error(given: usize, expected: usize) -> Self {
        Self::new(
            ExceptionKind::ArgumentError,
            vec![given.to_string(), expected.to_string()],
        )
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.kind.display_name())?;

        if self.payload.is_empty() {
            return Ok(());
        }
        write!(f, ": ")?;

        match self.kind {
            ExceptionKind::NoMethodError => match (self.payload.first(), self.payload.get(1)) {
                (Some(method), Some(class)) => {
                    write!(f, "undefined method '{}' for an instance of {}", method, class)
                }
                _ => write!(f, "undefined method"),
            },
            ExceptionKind::NameError => match (self.payload.first(), self.payload.get(1)) {
                (Some(method), Some(class)) => {
                    write!(f, "undefined method '{}' for class '{}'", method, class)
                }
                (Some(name), None) => write!(f, "uninitialized constant {}", name),
                _ => Ok(()),
            },
            ExceptionKind::ArgumentError => match (self.payload.first(), self.payload.get(1)) {
                (Some(given), Some(expected)) => write!(
                    f,
                    "wrong number of arguments (given {}, expected {})",
                    given, expected
                ),
                _ => write!(f, "wrong number of arguments"),
            },
            ExceptionKind::TypeError => match self.payload.first() {
                Some(msg) => write!(f, "{}", msg),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_method_error_message() {
        let exc = Exception::no_method_error("owner", "Integer");
        assert_eq!(
            exc.to_string(),
            "NoMethodError: undefined method 'owner' for an instance of Integer"
        );
    }

    #[test]
    fn uninitialized_constant_message() {
        let exc = Exception::uninitialized_constant("AppMap::Hook");
        assert_eq!(
            exc.to_string(),
            "NameError: uninitialized constant AppMap::Hook"
        );
    }

    #[test]
    fn argument_error_message() {
        let exc = Exception::argument_error(0, 1);
        assert_eq!(
            exc.to_string(),
            "ArgumentError: wrong number of arguments (given 0, expected 1)"
        );
    }

    #[test]
    fn type_error_message() {
        let exc = Exception::cant_define_singleton();
        assert_eq!(exc.to_string(), "TypeError: can't define singleton");
    }
}
