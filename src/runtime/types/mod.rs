mod class;
mod method;
mod method_table;
mod module;
mod object;

pub use class::Class;
pub use method::Method;
pub use method_table::MethodTable;
pub use module::Module;
pub use object::Object;
