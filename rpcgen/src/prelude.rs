//! Prelude module for convenient imports.
//!
//! ```ignore
//! use rpcgen::prelude::*;
//! ```

// Schema types
pub use rpcgen_schema::{
    ApiDescription, DataType, EnumValue, ExceptionRef, ExceptionType, Operation, Param,
    SchemaViolation, SimpleResponse, SimpleType, TypeDescriptor, parse_document, resolve_type,
};

// Codegen types
pub use rpcgen_codegen::{
    CodegenConfig, CodegenError, GeneratedBindings, Generator, generate_from_file,
    generate_from_xml,
};
