use serde::Serialize;

use crate::RuntimeValue;

/// A JavaScript-friendly representation of a host value. Reference values flatten to their
/// display names; `null` names mark anonymous classes and modules.
#[derive(Serialize)]
#[serde(tag = "type", content = "value")]
pub enum WasmValue {
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    Sym(String),
    Class(Option<String>),
    Module(Option<String>),
    Object(Option<String>),
    Method(WasmMethod),
}

#[derive(Serialize)]
pub struct WasmMethod {
    name: String,
    owner: Option<String>,
}

impl From<&RuntimeValue> for WasmValue {
    fn from(value: &RuntimeValue) -> Self {
        match value {
            RuntimeValue::Nil => WasmValue::Nil,
            RuntimeValue::Bool(b) => WasmValue::Bool(*b),
            RuntimeValue::Int(i) => WasmValue::Int(*i),
            RuntimeValue::Str(s) => WasmValue::Str(s.clone()),
            RuntimeValue::Sym(s) => WasmValue::Sym(s.clone()),
            RuntimeValue::Class(c) => WasmValue::Class(c.borrow().name().map(str::to_string)),
            RuntimeValue::Module(m) => WasmValue::Module(m.borrow().name().map(str::to_string)),
            RuntimeValue::Object(o) => {
                let class = o.borrow().class();
                let name = class.borrow().name().map(str::to_string);
                WasmValue::Object(name)
            }
            RuntimeValue::Method(m) => WasmValue::Method(WasmMethod {
                name: m.borrow().name().to_string(),
                owner: owner_name(&m.borrow().owner()),
            }),
        }
    }
}

fn owner_name(owner: &RuntimeValue) -> Option<String> {
    match owner {
        RuntimeValue::Class(c) => c.borrow().name().map(str::to_string),
        RuntimeValue::Module(m) => m.borrow().name().map(str::to_string),
        _ => None,
    }
}
