use std::collections::HashMap;

use crate::{
    core::Container,
    runtime::{
        protocols::CloneableNativeMethod,
        types::{Class, MethodTable},
        RuntimeValue,
    },
};

/// A module: a named (or anonymous) namespace with its own method and constant tables. Module
/// methods live in the module's singleton class, exactly as they do for classes.
#[derive(Debug)]
pub struct Module {
    name: Option<String>,
    methods: MethodTable,
    ivars: HashMap<String, RuntimeValue>,
    constants: HashMap<String, RuntimeValue>,
    singleton_class: Option<Container<Class>>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            methods: MethodTable::new(),
            ivars: HashMap::new(),
            constants: HashMap::new(),
            singleton_class: None,
        }
    }

    pub fn new_anonymous() -> Self {
        Self {
            name: None,
            methods: MethodTable::new(),
            ivars: HashMap::new(),
            constants: HashMap::new(),
            singleton_class: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub fn define_method(&mut self, name: &str, method: Box<dyn CloneableNativeMethod>) {
        self.methods.insert(name, method);
    }

    pub fn ivar_get(&self, name: &str) -> Option<RuntimeValue> {
        self.ivars.get(name).cloned()
    }

    pub fn ivar_set(&mut self, name: &str, value: RuntimeValue) {
        self.ivars.insert(name.to_string(), value);
    }

    pub fn const_get(&self, name: &str) -> Option<RuntimeValue> {
        self.constants.get(name).cloned()
    }

    pub fn const_set(&mut self, name: &str, value: RuntimeValue) {
        self.constants.insert(name.to_string(), value);
    }

    pub fn singleton_class(&self) -> Option<Container<Class>> {
        self.singleton_class.clone()
    }

    pub fn set_singleton_class(&mut self, class: Container<Class>) {
        self.singleton_class = Some(class);
    }
}
