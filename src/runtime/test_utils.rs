use crate::{
    domain::HostResult,
    runtime::{protocols::NativeMethod, utils::Args, Runtime, RuntimeValue},
};

/// A definition body which returns a fixed string, for shaping fixtures. Behavior is irrelevant
/// to owner resolution; only where the definition lands matters.
#[derive(Clone)]
pub(crate) struct ReturnsStr {
    name: String,
    value: String,
}

impl ReturnsStr {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl NativeMethod for ReturnsStr {
    fn call(
        &self,
        _runtime: &Runtime,
        _receiver: RuntimeValue,
        _args: Args,
    ) -> HostResult<RuntimeValue> {
        Ok(RuntimeValue::Str(self.value.clone()))
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// A runtime with the AppMap extension registered.
pub(crate) fn hooked_runtime() -> Runtime {
    let mut runtime = Runtime::new();
    crate::hook::init(&mut runtime).expect("hook registration should succeed on a fresh runtime");
    runtime
}

/// Fetch a bound method object through reflection, failing the test loudly if it is missing.
pub(crate) fn method_of(runtime: &Runtime, receiver: &RuntimeValue, name: &str) -> RuntimeValue {
    runtime
        .method_object(receiver, name)
        .unwrap_or_else(|exc| panic!("expected method '{}' to resolve, got: {}", name, exc))
}

macro_rules! assert_no_method_error {
    ($exc:expr, $method:expr) => {{
        match &$exc {
            $crate::domain::Exception {
                kind: $crate::domain::ExceptionKind::NoMethodError,
                payload,
            } => {
                assert_eq!(
                    payload.first().map(String::as_str),
                    Some($method),
                    "NoMethodError raised for the wrong method: {:?}",
                    payload
                );
            }
            other => panic!("Expected NoMethodError, got: {:?}", other),
        }
    }};
}

macro_rules! assert_type_error {
    ($exc:expr, $expected_message:expr) => {{
        match &$exc {
            $crate::domain::Exception {
                kind: $crate::domain::ExceptionKind::TypeError,
                payload,
            } => {
                assert_eq!(
                    payload.first().map(String::as_str),
                    Some($expected_message),
                    "Unexpected TypeError message"
                );
            }
            other => panic!("Expected TypeError, got: {:?}", other),
        }
    }};
}

pub(crate) use assert_no_method_error;
pub(crate) use assert_type_error;
