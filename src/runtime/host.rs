use std::collections::HashMap;

use crate::{
    core::{log, Container, LogLevel},
    domain::{Exception, HostResult},
    runtime::{
        builtins,
        protocols::CloneableNativeMethod,
        types::{Class, Method, Module, Object},
        utils::Args,
        RuntimeValue,
    },
};

/// The fixed internal identifier under which a singleton class records the value it was
/// synthesized for.
pub const ATTACHED_IVAR: &str = "__attached__";

/// The host runtime: the bootstrapped core class graph plus the embedding operations native
/// extensions are written against. All queries are synchronous and read-only with respect to the
/// object graph unless they are explicitly definitions.
pub struct Runtime {
    object_class: Container<Class>,
    module_class: Container<Class>,
    class_class: Container<Class>,
    nil_class: Container<Class>,
    true_class: Container<Class>,
    false_class: Container<Class>,
    integer_class: Container<Class>,
    string_class: Container<Class>,
    symbol_class: Container<Class>,
    method_class: Container<Class>,
    constants: HashMap<String, RuntimeValue>,
}

impl Runtime {
    pub fn new() -> Self {
        let object_class = Container::new(Class::new("Object", None));
        let module_class = Container::new(Class::new("Module", Some(object_class.clone())));
        let class_class = Container::new(Class::new("Class", Some(module_class.clone())));

        let core_class = |name: &str| Container::new(Class::new(name, Some(object_class.clone())));

        let mut runtime = Self {
            nil_class: core_class("NilClass"),
            true_class: core_class("TrueClass"),
            false_class: core_class("FalseClass"),
            integer_class: core_class("Integer"),
            string_class: core_class("String"),
            symbol_class: core_class("Symbol"),
            method_class: core_class("Method"),
            object_class,
            module_class,
            class_class,
            constants: HashMap::new(),
        };

        builtins::install(&runtime);

        for class in [
            &runtime.object_class,
            &runtime.module_class,
            &runtime.class_class,
            &runtime.nil_class,
            &runtime.true_class,
            &runtime.false_class,
            &runtime.integer_class,
            &runtime.string_class,
            &runtime.symbol_class,
            &runtime.method_class,
        ] {
            let name = class
                .borrow()
                .name()
                .expect("core classes are always named")
                .to_string();
            runtime
                .constants
                .insert(name, RuntimeValue::Class(class.clone()));
        }

        runtime
    }

    pub fn object_class(&self) -> Container<Class> {
        self.object_class.clone()
    }

    pub fn module_class(&self) -> Container<Class> {
        self.module_class.clone()
    }

    pub fn class_class(&self) -> Container<Class> {
        self.class_class.clone()
    }

    pub fn method_class(&self) -> Container<Class> {
        self.method_class.clone()
    }

    /// The runtime class of a value, per the host's `class` query. Singleton classes are
    /// skipped: this always answers with the real class.
    pub fn class_of(&self, value: &RuntimeValue) -> Container<Class> {
        match value {
            RuntimeValue::Nil => self.nil_class.clone(),
            RuntimeValue::Bool(true) => self.true_class.clone(),
            RuntimeValue::Bool(false) => self.false_class.clone(),
            RuntimeValue::Int(_) => self.integer_class.clone(),
            RuntimeValue::Str(_) => self.string_class.clone(),
            RuntimeValue::Sym(_) => self.symbol_class.clone(),
            RuntimeValue::Class(_) => self.class_class.clone(),
            RuntimeValue::Module(_) => self.module_class.clone(),
            RuntimeValue::Object(o) => o.borrow().class(),
            RuntimeValue::Method(_) => self.method_class.clone(),
        }
    }

    /// Where method lookup for this value starts: its singleton class when one has been
    /// synthesized, otherwise its runtime class.
    fn dispatch_class(&self, value: &RuntimeValue) -> Container<Class> {
        let singleton = match value {
            RuntimeValue::Object(o) => o.borrow().singleton_class(),
            RuntimeValue::Class(c) => c.borrow().singleton_class(),
            RuntimeValue::Module(m) => m.borrow().singleton_class(),
            _ => None,
        };
        singleton.unwrap_or_else(|| self.class_of(value))
    }

    /// Resolve a method name for a receiver, walking singleton class first and then the
    /// superclass chain. Returns the owning class value alongside the definition.
    fn lookup(
        &self,
        receiver: &RuntimeValue,
        name: &str,
    ) -> Option<(RuntimeValue, Box<dyn CloneableNativeMethod>)> {
        let mut current = Some(self.dispatch_class(receiver));
        while let Some(class) = current {
            if let Some(method) = class.borrow().methods().get(name) {
                return Some((RuntimeValue::Class(class.clone()), method));
            }
            current = class.borrow().superclass();
        }
        None
    }

    /// Invoke a method through full dispatch. A receiver which does not understand the message
    /// fails with the host's standard `NoMethodError`; nothing is swallowed or defaulted.
    pub fn call_method(
        &self,
        receiver: &RuntimeValue,
        name: &str,
        args: Args,
    ) -> HostResult<RuntimeValue> {
        log(LogLevel::Trace, || {
            format!(
                "dispatching {}#{}",
                RuntimeValue::Class(self.class_of(receiver)),
                name
            )
        });

        match self.lookup(receiver, name) {
            Some((_, method)) => method.call(self, receiver.clone(), args),
            None => Err(Exception::no_method_error(
                name,
                RuntimeValue::Class(self.class_of(receiver)).to_string(),
            )),
        }
    }

    /// Build a bound method object, the reflection handle behind `Object#method`.
    pub fn method_object(&self, receiver: &RuntimeValue, name: &str) -> HostResult<RuntimeValue> {
        match self.lookup(receiver, name) {
            Some((owner, fun)) => Ok(RuntimeValue::Method(Container::new(Method::new(
                receiver.clone(),
                name,
                owner,
                fun,
            )))),
            None => Err(Exception::undefined_method(
                name,
                RuntimeValue::Class(self.class_of(receiver)).to_string(),
            )),
        }
    }

    /// The singleton class of a value, synthesizing it on first access. The value itself is
    /// recorded in the new class's ivar table under [`ATTACHED_IVAR`]. Immediates cannot grow
    /// singleton classes.
    pub fn singleton_class_of(&self, value: &RuntimeValue) -> HostResult<Container<Class>> {
        match value {
            RuntimeValue::Object(o) => {
                if let Some(singleton) = o.borrow().singleton_class() {
                    return Ok(singleton);
                }
                let superclass = o.borrow().class();
                let singleton = self.synthesize_singleton(superclass, value);
                o.borrow_mut().set_singleton_class(singleton.clone());
                Ok(singleton)
            }
            RuntimeValue::Class(c) => {
                if let Some(singleton) = c.borrow().singleton_class() {
                    return Ok(singleton);
                }
                let singleton = self.synthesize_singleton(self.class_class.clone(), value);
                c.borrow_mut().set_singleton_class(singleton.clone());
                Ok(singleton)
            }
            RuntimeValue::Module(m) => {
                if let Some(singleton) = m.borrow().singleton_class() {
                    return Ok(singleton);
                }
                let singleton = self.synthesize_singleton(self.module_class.clone(), value);
                m.borrow_mut().set_singleton_class(singleton.clone());
                Ok(singleton)
            }
            _ => Err(Exception::cant_define_singleton()),
        }
    }

    fn synthesize_singleton(
        &self,
        superclass: Container<Class>,
        attached: &RuntimeValue,
    ) -> Container<Class> {
        log(LogLevel::Debug, || {
            format!("synthesizing singleton class for {}", attached)
        });
        let singleton = Container::new(Class::new_singleton(superclass));
        singleton
            .borrow_mut()
            .ivar_set(ATTACHED_IVAR, attached.clone());
        singleton
    }

    pub fn define_method(
        &self,
        class: &Container<Class>,
        name: &str,
        method: impl CloneableNativeMethod + 'static,
    ) {
        class.borrow_mut().define_method(name, Box::new(method));
    }

    /// Define a method on the value's singleton class, creating that class if needed. This is
    /// how per-object methods and "class methods" come into existence.
    pub fn define_singleton_method(
        &self,
        value: &RuntimeValue,
        name: &str,
        method: impl CloneableNativeMethod + 'static,
    ) -> HostResult<()> {
        let singleton = self.singleton_class_of(value)?;
        singleton.borrow_mut().define_method(name, Box::new(method));
        Ok(())
    }

    /// Register (or reopen) a top-level module.
    pub fn define_module(&mut self, name: &str) -> HostResult<Container<Module>> {
        match self.constants.get(name) {
            Some(RuntimeValue::Module(existing)) => Ok(existing.clone()),
            Some(_) => Err(Exception::type_error(format!("{} is not a module", name))),
            None => {
                let module = Container::new(Module::new(name));
                self.constants
                    .insert(name.to_string(), RuntimeValue::Module(module.clone()));
                Ok(module)
            }
        }
    }

    /// Register (or reopen) a top-level class.
    pub fn define_class(
        &mut self,
        name: &str,
        superclass: Container<Class>,
    ) -> HostResult<Container<Class>> {
        match self.constants.get(name) {
            Some(RuntimeValue::Class(existing)) => Ok(existing.clone()),
            Some(_) => Err(Exception::type_error(format!("{} is not a class", name))),
            None => {
                let class = Container::new(Class::new(name, Some(superclass)));
                self.constants
                    .insert(name.to_string(), RuntimeValue::Class(class.clone()));
                Ok(class)
            }
        }
    }

    /// Register a class nested under a module, named with the host's `Outer::Inner` convention.
    pub fn define_class_under(
        &self,
        module: &Container<Module>,
        name: &str,
        superclass: Container<Class>,
    ) -> HostResult<Container<Class>> {
        match module.borrow().const_get(name) {
            Some(RuntimeValue::Class(existing)) => return Ok(existing),
            Some(_) => return Err(Exception::type_error(format!("{} is not a class", name))),
            None => {}
        }

        let qualified = match module.borrow().name() {
            Some(outer) => format!("{}::{}", outer, name),
            None => name.to_string(),
        };
        let class = Container::new(Class::new(qualified, Some(superclass)));
        module
            .borrow_mut()
            .const_set(name, RuntimeValue::Class(class.clone()));
        Ok(class)
    }

    pub fn new_instance(&self, class: &Container<Class>) -> RuntimeValue {
        RuntimeValue::Object(Container::new(Object::new(class.clone())))
    }

    /// Generic attribute lookup keyed by ivar name. Reading an ivar which was never written
    /// yields `None`, per host convention; immediates simply have no ivars.
    pub fn ivar_get(&self, value: &RuntimeValue, name: &str) -> Option<RuntimeValue> {
        match value {
            RuntimeValue::Object(o) => o.borrow().ivar_get(name),
            RuntimeValue::Class(c) => c.borrow().ivar_get(name),
            RuntimeValue::Module(m) => m.borrow().ivar_get(name),
            _ => None,
        }
    }

    pub fn ivar_set(&self, value: &RuntimeValue, name: &str, ivar: RuntimeValue) -> HostResult<()> {
        match value {
            RuntimeValue::Object(o) => o.borrow_mut().ivar_set(name, ivar),
            RuntimeValue::Class(c) => c.borrow_mut().ivar_set(name, ivar),
            RuntimeValue::Module(m) => m.borrow_mut().ivar_set(name, ivar),
            _ => {
                return Err(Exception::type_error(format!(
                    "can't set instance variable on {}",
                    value.get_kind()
                )))
            }
        }
        Ok(())
    }

    /// The display name of a class or module value: its assigned name, or `Nil` when it is
    /// anonymous (singleton classes included).
    pub fn mod_name(&self, value: &RuntimeValue) -> HostResult<RuntimeValue> {
        let name = match value {
            RuntimeValue::Class(c) => c.borrow().name().map(str::to_string),
            RuntimeValue::Module(m) => m.borrow().name().map(str::to_string),
            _ => {
                return Err(Exception::type_error(format!(
                    "{} is not a class/module",
                    value
                )))
            }
        };
        Ok(name.map(RuntimeValue::Str).unwrap_or(RuntimeValue::Nil))
    }

    /// Resolve a constant path such as `AppMap::Hook`, starting from the top-level table.
    pub fn const_get(&self, path: &str) -> HostResult<RuntimeValue> {
        let mut segments = path.split("::");
        let first = segments.next().unwrap_or_default();
        let mut value = self
            .constants
            .get(first)
            .cloned()
            .ok_or_else(|| Exception::uninitialized_constant(first))?;

        for segment in segments {
            let nested = match &value {
                RuntimeValue::Module(m) => m.borrow().const_get(segment),
                RuntimeValue::Class(c) => c.borrow().const_get(segment),
                _ => None,
            };
            value = nested.ok_or_else(|| Exception::uninitialized_constant(path))?;
        }

        Ok(value)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
