mod builtins;
mod host;
pub mod protocols;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;
pub mod utils;
mod value;

pub use host::{Runtime, ATTACHED_IVAR};
pub use value::RuntimeValue;
