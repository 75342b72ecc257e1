//! # rpcgen
//!
//! JSON-RPC client binding generator driven by XML API descriptions.
//!
//! An API description lists operations, data types, simple types and
//! exception types in a fixed XML dialect. rpcgen parses it into a typed
//! model, rejecting anything the dialect does not define, and emits Rust
//! declarations for a client crate.
//!
//! ## Features
//!
//! - **Strict parsing** - Unknown elements, attributes or text abort generation
//! - **Type grammar** - `list(T)`, `set(T)` and `map(K,V)` carried through to Rust
//! - **Wire fidelity** - Enum labels and exception codes kept via `serde(rename)`
//! - **All or nothing** - Output exists only when every declaration was generated
//!
//! ## Quick Start
//!
//! ```ignore
//! use rpcgen::prelude::*;
//! use std::path::Path;
//!
//! let config = CodegenConfig::new("SportsAPING", "v1.0")
//!     .client_path("crate::client::BFClient");
//! let bindings = generate_from_file(Path::new("SportsAPING.xml"), &config)?;
//! bindings.write_to_dir(Path::new("src/generated"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML parsing, type grammar and the API model
//! - [`codegen`] - Type mapping and Rust code generation

pub mod prelude;

/// XML parsing, type grammar and the API model.
pub mod schema {
    pub use rpcgen_schema::*;
}

/// Type mapping and Rust code generation.
pub mod codegen {
    pub use rpcgen_codegen::*;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_pipeline() {
        let xml = r#"<interface>
            <simpleType name="Side" type="string">
                <validValues>
                    <value name="BACK"><description>Back bet</description></value>
                    <value name="LAY"><description>Lay bet</description></value>
                </validValues>
            </simpleType>
        </interface>"#;

        let api = parse_document(xml).expect("Failed to parse");
        assert!(api.simple_type("Side").is_some_and(SimpleType::is_enum));

        let config = CodegenConfig::new("SportsAPING", "v1.0");
        let bindings = Generator::new(&api, &config).generate().expect("Failed to generate");
        assert!(bindings.types.contains("pub enum Side {"));
        assert!(bindings.methods.contains("impl Client {"));
    }
}
