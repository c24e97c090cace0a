use crate::{
    domain::HostResult,
    runtime::{utils::Args, Runtime, RuntimeValue},
};

/// The body of a method defined through the embedding API. All behavior in this object model is
/// native; there is no interpreted code.
pub trait NativeMethod {
    fn call(
        &self,
        runtime: &Runtime,
        receiver: RuntimeValue,
        args: Args,
    ) -> HostResult<RuntimeValue>;

    fn name(&self) -> String;
}

/// A [`NativeMethod`] which can live in a method table. Method tables hand out clones on lookup,
/// so the trait object itself must be cloneable.
pub trait CloneableNativeMethod: NativeMethod {
    fn clone_box(&self) -> Box<dyn CloneableNativeMethod>;
}

impl<T> CloneableNativeMethod for T
where
    T: NativeMethod + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn CloneableNativeMethod> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn CloneableNativeMethod> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
