use crate::{
    domain::{Exception, HostResult},
    runtime::RuntimeValue,
};

/// Positional arguments for a method call.
#[derive(Debug, Clone, Default)]
pub struct Args {
    args: Vec<RuntimeValue>,
}

impl Args {
    pub fn new(args: Vec<RuntimeValue>) -> Self {
        Self { args }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Fetch a positional argument. Arity must have been checked with [`Args::expect_len`]
    /// before indexing.
    pub fn get_arg(&self, index: usize) -> RuntimeValue {
        self.args[index].clone()
    }

    pub fn expect_len(&self, expected: usize) -> HostResult<()> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(Exception::argument_error(self.args.len(), expected))
        }
    }
}

impl From<Vec<RuntimeValue>> for Args {
    fn from(args: Vec<RuntimeValue>) -> Self {
        Self::new(args)
    }
}

macro_rules! args {
    ($($expr:expr),* $(,)?) => {
        $crate::runtime::utils::Args::new(vec![$($expr),*])
    };
}

pub(crate) use args;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExceptionKind;

    #[test]
    fn arity_mismatch_raises_argument_error() {
        let args = args![RuntimeValue::Nil];
        let exc = args.expect_len(2).unwrap_err();
        assert_eq!(exc.kind, ExceptionKind::ArgumentError);
        assert_eq!(exc.payload, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn arity_match_passes() {
        let args = args![RuntimeValue::Int(1), RuntimeValue::Nil];
        assert!(args.expect_len(2).is_ok());
        assert_eq!(args.get_arg(0), RuntimeValue::Int(1));
    }
}
