//! The reflection methods every runtime ships with. These are the collaborators the AppMap hook
//! consumes: `Object#class`, `Object#method`, `Module#name`, and the `Method` accessors.

use crate::{
    domain::HostResult,
    runtime::{protocols::NativeMethod, utils::Args, Runtime, RuntimeValue},
};

pub fn install(runtime: &Runtime) {
    let object = runtime.object_class();
    object.borrow_mut().define_method("class", Box::new(ClassBuiltin));
    object
        .borrow_mut()
        .define_method("method", Box::new(MethodBuiltin));

    runtime
        .module_class()
        .borrow_mut()
        .define_method("name", Box::new(NameBuiltin));

    let method = runtime.method_class();
    method
        .borrow_mut()
        .define_method("owner", Box::new(OwnerBuiltin));
    method
        .borrow_mut()
        .define_method("name", Box::new(MethodNameBuiltin));
    method
        .borrow_mut()
        .define_method("receiver", Box::new(ReceiverBuiltin));
    method
        .borrow_mut()
        .define_method("call", Box::new(CallBuiltin));
}

/// `Object#class`: the runtime class, skipping singleton classes.
#[derive(Clone)]
struct ClassBuiltin;

impl NativeMethod for ClassBuiltin {
    fn call(
        &self,
        runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(0)?;
        Ok(RuntimeValue::Class(runtime.class_of(&receiver)))
    }

    fn name(&self) -> String {
        "class".into()
    }
}

/// `Object#method`: build a bound method object for a symbol or string name.
#[derive(Clone)]
struct MethodBuiltin;

impl NativeMethod for MethodBuiltin {
    fn call(
        &self,
        runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(1)?;
        let name = args.get_arg(0).as_method_name()?;
        runtime.method_object(&receiver, &name)
    }

    fn name(&self) -> String {
        "method".into()
    }
}

/// `Module#name`: the assigned name, or nil for anonymous classes and modules. Reached by both
/// class and module values since `Class` sits below `Module` in the core chain.
#[derive(Clone)]
struct NameBuiltin;

impl NativeMethod for NameBuiltin {
    fn call(
        &self,
        runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(0)?;
        runtime.mod_name(&receiver)
    }

    fn name(&self) -> String {
        "name".into()
    }
}

/// `Method#owner`: the class or module value whose table the definition was found in.
#[derive(Clone)]
struct OwnerBuiltin;

impl NativeMethod for OwnerBuiltin {
    fn call(
        &self,
        _runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(0)?;
        Ok(receiver.as_method()?.borrow().owner())
    }

    fn name(&self) -> String {
        "owner".into()
    }
}

/// `Method#name`.
#[derive(Clone)]
struct MethodNameBuiltin;

impl NativeMethod for MethodNameBuiltin {
    fn call(
        &self,
        _runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(0)?;
        let name = receiver.as_method()?.borrow().name().to_string();
        Ok(RuntimeValue::Sym(name))
    }

    fn name(&self) -> String {
        "name".into()
    }
}

/// `Method#receiver`.
#[derive(Clone)]
struct ReceiverBuiltin;

impl NativeMethod for ReceiverBuiltin {
    fn call(
        &self,
        _runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        args.expect_len(0)?;
        Ok(receiver.as_method()?.borrow().receiver())
    }

    fn name(&self) -> String {
        "receiver".into()
    }
}

/// `Method#call`: invoke the captured definition against the captured receiver.
#[derive(Clone)]
struct CallBuiltin;

impl NativeMethod for CallBuiltin {
    fn call(
        &self,
        runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        let method = receiver.as_method()?;
        let fun = method.borrow().fun();
        let target = method.borrow().receiver();
        fun.call(runtime, target, args)
    }

    fn name(&self) -> String {
        "call".into()
    }
}
