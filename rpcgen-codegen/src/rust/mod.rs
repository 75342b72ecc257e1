//! Rust code generation modules.

pub mod enums;
pub mod exceptions;
pub mod mapper;
pub mod names;
pub mod operations;
pub mod types;

pub use enums::EnumGenerator;
pub use exceptions::ExceptionGenerator;
pub use mapper::TypeMapper;
pub use names::sanitize_ident;
pub use operations::OperationGenerator;
pub use types::TypeGenerator;
