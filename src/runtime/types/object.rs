use std::collections::HashMap;

use crate::{
    core::Container,
    runtime::{types::Class, RuntimeValue},
};

/// A plain instance. Identity is container identity; the ivar table and the (lazily created)
/// singleton class are per-instance state.
#[derive(Debug)]
pub struct Object {
    class: Container<Class>,
    ivars: HashMap<String, RuntimeValue>,
    singleton_class: Option<Container<Class>>,
}

impl Object {
    pub fn new(class: Container<Class>) -> Self {
        Self {
            class,
            ivars: HashMap::new(),
            singleton_class: None,
        }
    }

    pub fn class(&self) -> Container<Class> {
        self.class.clone()
    }

    pub fn ivar_get(&self, name: &str) -> Option<RuntimeValue> {
        self.ivars.get(name).cloned()
    }

    pub fn ivar_set(&mut self, name: &str, value: RuntimeValue) {
        self.ivars.insert(name.to_string(), value);
    }

    pub fn singleton_class(&self) -> Option<Container<Class>> {
        self.singleton_class.clone()
    }

    pub fn set_singleton_class(&mut self, class: Container<Class>) {
        self.singleton_class = Some(class);
    }
}
