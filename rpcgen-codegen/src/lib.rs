//! # rpcgen Codegen
//!
//! Rust client binding generation from API descriptions.
//!
//! This crate provides:
//! - Type mapping from the schema type grammar to Rust types
//! - Enum, struct and exception code generation
//! - Request struct and client method generation
//! - Writing the generated groups to disk

pub mod config;
pub mod error;
pub mod generator;
pub mod rust;
pub mod writer;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use generator::{BANNER, GeneratedBindings, Generator};

/// Generates Rust bindings from an API description string.
///
/// # Arguments
/// * `xml` - API description content
/// * `config` - Generation settings
///
/// # Returns
/// The four generated source groups.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(
    xml: &str,
    config: &CodegenConfig,
) -> Result<GeneratedBindings, CodegenError> {
    let api = rpcgen_schema::parse_document(xml)?;
    Generator::new(&api, config).generate()
}

/// Generates Rust bindings from an API description file.
///
/// # Arguments
/// * `path` - Path to the API description file
/// * `config` - Generation settings
///
/// # Returns
/// The four generated source groups.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &CodegenConfig,
) -> Result<GeneratedBindings, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "read API description");
    generate_from_xml(&xml, config)
}
