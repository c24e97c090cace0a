use std::collections::HashMap;

use crate::{
    core::Container,
    runtime::{protocols::CloneableNativeMethod, types::MethodTable, RuntimeValue},
};

/// A class in the host object graph. Singleton classes are ordinary [`Class`] values with
/// `is_singleton` set and no name; the value they were synthesized for is recorded in their ivar
/// table under [`crate::runtime::ATTACHED_IVAR`].
#[derive(Debug)]
pub struct Class {
    name: Option<String>,
    superclass: Option<Container<Class>>,
    methods: MethodTable,
    ivars: HashMap<String, RuntimeValue>,
    constants: HashMap<String, RuntimeValue>,
    singleton_class: Option<Container<Class>>,
    is_singleton: bool,
}

impl Class {
    pub fn new(name: impl Into<String>, superclass: Option<Container<Class>>) -> Self {
        Self {
            name: Some(name.into()),
            superclass,
            methods: MethodTable::new(),
            ivars: HashMap::new(),
            constants: HashMap::new(),
            singleton_class: None,
            is_singleton: false,
        }
    }

    pub fn new_anonymous(superclass: Option<Container<Class>>) -> Self {
        Self {
            name: None,
            superclass,
            methods: MethodTable::new(),
            ivars: HashMap::new(),
            constants: HashMap::new(),
            singleton_class: None,
            is_singleton: false,
        }
    }

    /// A synthesized per-value class. Its superclass is the runtime class of the value it is
    /// attached to, which keeps method lookup a single walk up one chain.
    pub fn new_singleton(superclass: Container<Class>) -> Self {
        Self {
            name: None,
            superclass: Some(superclass),
            methods: MethodTable::new(),
            ivars: HashMap::new(),
            constants: HashMap::new(),
            singleton_class: None,
            is_singleton: true,
        }
    }

    /// The assigned name, per host convention: `None` for anonymous classes and for singleton
    /// classes.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn superclass(&self) -> Option<Container<Class>> {
        self.superclass.clone()
    }

    pub fn is_singleton(&self) -> bool {
        self.is_singleton
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_classes_are_anonymous() {
        let object = Container::new(Class::new("Object", None));
        let singleton = Class::new_singleton(object.clone());
        assert!(singleton.is_singleton());
        assert_eq!(singleton.name(), None);
        assert!(singleton.superclass().unwrap().same_identity(&object));
    }

    #[test]
    fn anonymous_class_has_no_name() {
        let class = Class::new_anonymous(None);
        assert_eq!(class.name(), None);
        assert!(!class.is_singleton());
    }
}
