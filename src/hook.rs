//! The AppMap extension surface: `AppMap::Hook.singleton_method_owner_name`.
//!
//! Reporting a singleton method's owner by name is useless when the owner is a synthesized
//! singleton class, which has no name of its own. The useful answer is the name of the real
//! class of the value the method was attached to, so the resolver dereferences the singleton
//! class through its attached value before asking for a display name.

use crate::{
    domain::HostResult,
    runtime::{protocols::NativeMethod, utils::Args, Runtime, RuntimeValue, ATTACHED_IVAR},
};

/// Resolve the owner name of a method. Pure query; every failure below (a value that does not
/// answer `owner`, most notably) propagates untouched.
pub fn resolve_owner_name(runtime: &Runtime, method: &RuntimeValue) -> HostResult<RuntimeValue> {
    let owner = runtime.call_method(method, "owner", Args::none())?;

    let subject = match runtime.ivar_get(&owner, ATTACHED_IVAR) {
        // The singleton class was synthesized for a class or module. It can carry its own name.
        Some(attached) if attached.is_class_or_module() => attached,
        // Synthesized for a plain instance: dereference one more level to its class.
        Some(attached) => RuntimeValue::Class(runtime.class_of(&attached)),
        // An ordinary owner has no attachment and is already the nameable subject.
        None => owner,
    };

    runtime.mod_name(&subject)
}

/// Register the extension: module `AppMap`, class `AppMap::Hook`, and the resolver as a
/// singleton method on `Hook`.
pub fn init(runtime: &mut Runtime) -> HostResult<()> {
    let appmap = runtime.define_module("AppMap")?;
    let object = runtime.object_class();
    let hook = runtime.define_class_under(&appmap, "Hook", object)?;

    runtime.define_singleton_method(
        &RuntimeValue::Class(hook),
        "singleton_method_owner_name",
        SingletonMethodOwnerName,
    )
}

#[derive(Clone)]
struct SingletonMethodOwnerName;

impl NativeMethod for SingletonMethodOwnerName {
    fn call(
        &self,
        runtime: &Runtime,
        _receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(1)?;
        resolve_owner_name(runtime, &args.get_arg(0))
    }

    fn name(&self) -> String {
        "singleton_method_owner_name".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::Container,
        domain::ExceptionKind,
        runtime::{test_utils::*, types::Class, utils::args},
    };

    fn resolve(runtime: &Runtime, method: &RuntimeValue) -> RuntimeValue {
        let hook = runtime.const_get("AppMap::Hook").unwrap();
        runtime
            .call_method(&hook, "singleton_method_owner_name", args![method.clone()])
            .unwrap()
    }

    #[test]
    fn plain_method_reports_the_declaring_class() {
        let mut runtime = hooked_runtime();
        let object = runtime.object_class();
        let user = runtime.define_class("User", object).unwrap();
        runtime.define_method(&user, "name", ReturnsStr::new("name", "Alice"));
        let alice = runtime.new_instance(&user);

        let method = method_of(&runtime, &alice, "name");
        assert_eq!(resolve(&runtime, &method), RuntimeValue::Str("User".into()));
    }

    #[test]
    fn singleton_method_on_an_instance_reports_the_instance_class() {
        let mut runtime = hooked_runtime();
        let object = runtime.object_class();
        let user = runtime.define_class("User", object).unwrap();
        let alice = runtime.new_instance(&user);
        runtime
            .define_singleton_method(&alice, "greet", ReturnsStr::new("greet", "hi"))
            .unwrap();

        let method = method_of(&runtime, &alice, "greet");

        // Not the singleton class's own (absent) name.
        assert_eq!(resolve(&runtime, &method), RuntimeValue::Str("User".into()));
    }

    #[test]
    fn singleton_method_on_a_class_reports_the_attached_class() {
        let mut runtime = hooked_runtime();
        let object = runtime.object_class();
        let user = runtime.define_class("User", object).unwrap();
        let user_value = RuntimeValue::Class(user);
        runtime
            .define_singleton_method(&user_value, "create", ReturnsStr::new("create", "created"))
            .unwrap();

        let method = method_of(&runtime, &user_value, "create");

        // The attached value is itself a class, so it is the subject directly.
        assert_eq!(resolve(&runtime, &method), RuntimeValue::Str("User".into()));
    }

    #[test]
    fn singleton_method_on_a_module_reports_the_module() {
        let mut runtime = hooked_runtime();
        let reporting = runtime.define_module("Reporting").unwrap();
        let reporting_value = RuntimeValue::Module(reporting);
        runtime
            .define_singleton_method(&reporting_value, "run", ReturnsStr::new("run", "ran"))
            .unwrap();

        let method = method_of(&runtime, &reporting_value, "run");
        assert_eq!(
            resolve(&runtime, &method),
            RuntimeValue::Str("Reporting".into())
        );
    }

    #[test]
    fn anonymous_owner_resolves_to_nil() {
        let runtime = hooked_runtime();
        let anon = Container::new(Class::new_anonymous(Some(runtime.object_class())));
        runtime.define_method(&anon, "name", ReturnsStr::new("name", "?"));
        let instance = runtime.new_instance(&anon);

        let method = method_of(&runtime, &instance, "name");
        assert_eq!(resolve(&runtime, &method), RuntimeValue::Nil);
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut runtime = hooked_runtime();
        let object = runtime.object_class();
        let user = runtime.define_class("User", object).unwrap();
        let alice = runtime.new_instance(&user);
        runtime
            .define_singleton_method(&alice, "greet", ReturnsStr::new("greet", "hi"))
            .unwrap();

        let method = method_of(&runtime, &alice, "greet");
        let first = resolve(&runtime, &method);
        let second = resolve(&runtime, &method);
        assert_eq!(first, second);
    }

    #[test]
    fn non_method_values_fail_with_no_method_error() {
        let runtime = hooked_runtime();
        let hook = runtime.const_get("AppMap::Hook").unwrap();

        let exc = runtime
            .call_method(
                &hook,
                "singleton_method_owner_name",
                args![RuntimeValue::Int(3)],
            )
            .unwrap_err();
        assert_no_method_error!(exc, "owner");
        assert_eq!(
            exc.to_string(),
            "NoMethodError: undefined method 'owner' for an instance of Integer"
        );
    }

    #[test]
    fn arity_is_exactly_one() {
        let runtime = hooked_runtime();
        let hook = runtime.const_get("AppMap::Hook").unwrap();

        let exc = runtime
            .call_method(&hook, "singleton_method_owner_name", Args::none())
            .unwrap_err();
        assert_eq!(exc.kind, ExceptionKind::ArgumentError);
    }

    #[test]
    fn registration_nests_hook_under_appmap() {
        let runtime = hooked_runtime();
        let hook = runtime.const_get("AppMap::Hook").unwrap();
        let name = runtime.mod_name(&hook).unwrap();
        assert_eq!(name, RuntimeValue::Str("AppMap::Hook".into()));
    }

    #[test]
    fn init_is_safe_to_repeat() {
        let mut runtime = hooked_runtime();
        init(&mut runtime).unwrap();
        assert!(runtime.const_get("AppMap::Hook").is_ok());
    }
}
