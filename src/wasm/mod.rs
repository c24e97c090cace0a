mod api;
mod repr;

pub use api::WasmRuntime;
