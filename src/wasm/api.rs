use console_error_panic_hook::set_once;
use wasm_bindgen::prelude::*;

use crate::{
    domain::{Exception, HostResult},
    hook,
    runtime::{protocols::NativeMethod, utils::Args},
    wasm::repr::WasmValue,
    Runtime, RuntimeValue,
};

/// A method body defined from JavaScript. Owner resolution only cares about where a definition
/// lands, so shapes modeled from the browser get inert bodies.
#[derive(Clone)]
struct StubMethod {
    name: String,
}

impl StubMethod {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl NativeMethod for StubMethod {
    fn call(
        &self,
        _runtime: &Runtime,
        _receiver: RuntimeValue,
        _args: Args,
    ) -> HostResult<RuntimeValue> {
        Ok(RuntimeValue::Nil)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// A host runtime held behind a JavaScript handle. Instances created from JavaScript are kept in
/// a slab and addressed by index.
#[wasm_bindgen]
pub struct WasmRuntime {
    runtime: Runtime,
    handles: Vec<RuntimeValue>,
}

#[wasm_bindgen]
impl WasmRuntime {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmRuntime {
        // Set the panic hook for better error messages in the browser console
        set_once();

        let mut runtime = Runtime::new();
        hook::init(&mut runtime).expect("hook registration should succeed on a fresh runtime");
        WasmRuntime {
            runtime,
            handles: Vec::new(),
        }
    }

    pub fn define_class(&mut self, name: String) -> Result<(), JsValue> {
        let object = self.runtime.object_class();
        self.runtime
            .define_class(&name, object)
            .map(|_| ())
            .map_err(to_js)
    }

    pub fn define_module(&mut self, name: String) -> Result<(), JsValue> {
        self.runtime.define_module(&name).map(|_| ()).map_err(to_js)
    }

    pub fn new_instance(&mut self, class_name: String) -> Result<u32, JsValue> {
        let class = self
            .runtime
            .const_get(&class_name)
            .and_then(|value| value.as_class())
            .map_err(to_js)?;
        self.handles.push(self.runtime.new_instance(&class));
        Ok((self.handles.len() - 1) as u32)
    }

    pub fn define_method(
        &mut self,
        class_name: String,
        method_name: String,
    ) -> Result<(), JsValue> {
        let class = self
            .runtime
            .const_get(&class_name)
            .and_then(|value| value.as_class())
            .map_err(to_js)?;
        self.runtime
            .define_method(&class, &method_name, StubMethod::new(&method_name));
        Ok(())
    }

    pub fn define_singleton_method(
        &mut self,
        handle: u32,
        method_name: String,
    ) -> Result<(), JsValue> {
        let value = self.value(handle)?;
        self.runtime
            .define_singleton_method(&value, &method_name, StubMethod::new(&method_name))
            .map_err(to_js)
    }

    /// Define a singleton method on a class or module resolved by constant path.
    pub fn define_constant_singleton_method(
        &mut self,
        path: String,
        method_name: String,
    ) -> Result<(), JsValue> {
        let value = self.runtime.const_get(&path).map_err(to_js)?;
        self.runtime
            .define_singleton_method(&value, &method_name, StubMethod::new(&method_name))
            .map_err(to_js)
    }

    pub fn owner_name(&self, handle: u32, method_name: String) -> Result<JsValue, JsValue> {
        let value = self.value(handle)?;
        self.resolve(&value, &method_name)
    }

    pub fn constant_owner_name(&self, path: String, method_name: String) -> Result<JsValue, JsValue> {
        let value = self.runtime.const_get(&path).map_err(to_js)?;
        self.resolve(&value, &method_name)
    }

    pub fn describe(&self, handle: u32) -> Result<JsValue, JsValue> {
        let value = self.value(handle)?;
        serde_wasm_bindgen::to_value(&WasmValue::from(&value)).map_err(|e| e.into())
    }

    fn resolve(&self, receiver: &RuntimeValue, method_name: &str) -> Result<JsValue, JsValue> {
        let method = self
            .runtime
            .method_object(receiver, method_name)
            .map_err(to_js)?;
        let name = hook::resolve_owner_name(&self.runtime, &method).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&WasmValue::from(&name)).map_err(|e| e.into())
    }

    fn value(&self, handle: u32) -> Result<RuntimeValue, JsValue> {
        self.handles
            .get(handle as usize)
            .cloned()
            .ok_or_else(|| JsValue::from_str("unknown handle"))
    }
}

impl Default for WasmRuntime {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(exc: Exception) -> JsValue {
    JsValue::from_str(&exc.to_string())
}
