//! # rpcgen Schema
//!
//! API description parser and intermediate representation.
//!
//! This crate provides:
//! - An owned XML element tree built with quick-xml
//! - The compact type grammar (`list(X)`, `set(X)`, `map(K,V)`)
//! - A strict parser that rejects any construct outside the dialect
//! - Cross-element validation
//! - The intermediate representation consumed by code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;
pub mod xml;

pub use error::SchemaViolation;
pub use ir::{
    ApiDescription, DataType, EnumValue, ExceptionRef, ExceptionType, Operation, Param,
    SimpleResponse, SimpleType,
};
pub use parser::{normalize_text, parse, parse_document};
pub use types::{TypeDescriptor, resolve_type};
pub use validation::{UnresolvedReference, unresolved_references, validate_api};
pub use xml::{XmlElement, XmlNode, parse_xml};
