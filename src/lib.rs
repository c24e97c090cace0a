//! An embeddable Ruby-style object model and the AppMap native extension written against it.
//!
//! The `runtime` module is the host: classes, modules, plain objects, singleton classes, and
//! native-method dispatch. The `hook` module is the extension: it registers
//! `AppMap::Hook.singleton_method_owner_name`, which resolves a method handle to the display
//! name of the entity that conceptually owns its behavior.
//!
//! ```
//! use appmap_hook::{hook, Runtime, RuntimeValue};
//!
//! let mut runtime = Runtime::new();
//! hook::init(&mut runtime).unwrap();
//!
//! let object = runtime.object_class();
//! let user = runtime.define_class("User", object).unwrap();
//! let alice = runtime.new_instance(&user);
//!
//! let method = runtime.method_object(&alice, "class").unwrap();
//! let name = hook::resolve_owner_name(&runtime, &method).unwrap();
//! assert_eq!(name, RuntimeValue::Str("Object".into()));
//! ```

pub mod core;
pub mod domain;
pub mod hook;
pub mod runtime;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use domain::{Exception, ExceptionKind, HostResult};
pub use runtime::{Runtime, RuntimeValue};
