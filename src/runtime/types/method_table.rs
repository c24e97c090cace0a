use std::{
    collections::HashMap,
    fmt::{Debug, Error, Formatter},
};

use crate::runtime::protocols::CloneableNativeMethod;

/// The per-class (or per-module) table of method definitions, keyed by method name.
#[derive(Default, Clone)]
pub struct MethodTable {
    table: HashMap<String, Box<dyn CloneableNativeMethod>>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Box<dyn CloneableNativeMethod>> {
        self.table.get(name).cloned()
    }

    pub fn insert(&mut self, name: &str, method: Box<dyn CloneableNativeMethod>) {
        self.table.insert(name.to_string(), method);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Return the names of all methods defined directly in this table.
    pub fn names(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }
}

impl Debug for MethodTable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let mut names = self.names();
        names.sort();
        write!(f, "MethodTable({})", names.join(", "))
    }
}
