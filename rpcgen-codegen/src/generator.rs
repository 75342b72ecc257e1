//! Generation orchestration.
//!
//! Output is split into four groups that compile as sibling modules: type
//! declarations, request structs, client methods and exception codes. Every
//! group is built in memory; [`GeneratedBindings`] only exists once all four
//! succeeded, so a failed run never leaves partial files behind.

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::rust::{
    EnumGenerator, ExceptionGenerator, OperationGenerator, TypeGenerator, TypeMapper,
};
use crate::writer::CodeWriter;
use rpcgen_schema::{ApiDescription, unresolved_references};
use std::path::Path;

/// Banner opening every generated file.
pub const BANNER: &str = "// This file is generated.\n// Any manual edits will be overwritten.";

/// Lints silenced in generated files; names follow the wire format.
const ALLOWED_LINTS: &[&str] = &[
    "non_camel_case_types",
    "non_snake_case",
    "unused_imports",
    "dead_code",
];

/// Generated source groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBindings {
    /// Type aliases, enumerations and data type structs.
    pub types: String,
    /// Request structs.
    pub requests: String,
    /// Client methods.
    pub methods: String,
    /// Exception code enumerations.
    pub exceptions: String,
}

impl GeneratedBindings {
    /// Returns each group with the file name it is written to.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            ("types.rs", self.types.as_str()),
            ("requests.rs", self.requests.as_str()),
            ("methods.rs", self.methods.as_str()),
            ("exceptions.rs", self.exceptions.as_str()),
        ]
    }

    /// Writes every group into `dir`, creating it if needed.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the directory or a file cannot be written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<(), CodegenError> {
        std::fs::create_dir_all(dir)?;
        for (file_name, content) in self.files() {
            std::fs::write(dir.join(file_name), content)?;
        }
        tracing::info!(dir = %dir.display(), "wrote generated bindings");
        Ok(())
    }
}

/// Main code generator.
pub struct Generator<'a> {
    api: &'a ApiDescription,
    config: &'a CodegenConfig,
    mapper: TypeMapper,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for an API description.
    #[must_use]
    pub fn new(api: &'a ApiDescription, config: &'a CodegenConfig) -> Self {
        Self {
            api,
            config,
            mapper: TypeMapper::new(config, api),
        }
    }

    /// Generates all four groups.
    ///
    /// # Errors
    /// Returns `CodegenError` if any declaration cannot be emitted.
    pub fn generate(&self) -> Result<GeneratedBindings, CodegenError> {
        self.check_references()?;

        let bindings = GeneratedBindings {
            types: self.generate_types()?,
            requests: self.generate_requests()?,
            methods: self.generate_methods()?,
            exceptions: self.generate_exceptions()?,
        };

        tracing::info!(
            service = self.config.service_name(),
            version = self.config.version(),
            operations = self.api.operations.len(),
            data_types = self.api.data_types.len(),
            simple_types = self.api.simple_types.len(),
            exception_types = self.api.exception_types.len(),
            "generated bindings"
        );
        Ok(bindings)
    }

    /// Reports type references that neither an override nor a declaration
    /// resolves. Strict mode rejects the first one.
    fn check_references(&self) -> Result<(), CodegenError> {
        let unresolved = unresolved_references(self.api)
            .into_iter()
            .filter(|r| !self.mapper.resolves(&r.type_name));

        for reference in unresolved {
            if self.config.is_strict() {
                return Err(CodegenError::UnmappedType {
                    type_name: reference.type_name,
                });
            }
            tracing::warn!(
                location = %reference.location,
                type_name = %reference.type_name,
                "type reference passed through unchanged"
            );
        }
        Ok(())
    }

    fn generate_types(&self) -> Result<String, CodegenError> {
        let exceptions_glob = format!("{}::*", self.config.exceptions());
        let mut w = prelude(&[
            "chrono::{DateTime, Utc}",
            "serde::{Deserialize, Serialize}",
            "std::collections::HashMap",
            exceptions_glob.as_str(),
        ]);
        let types = TypeGenerator::new(self.api, &self.mapper);
        types.generate_aliases(&mut w)?;
        EnumGenerator::new(self.api).generate(&mut w)?;
        types.generate_structs(&mut w)?;
        Ok(w.finish())
    }

    fn generate_requests(&self) -> Result<String, CodegenError> {
        let types_glob = format!("{}::*", self.config.types());
        let exceptions_glob = format!("{}::*", self.config.exceptions());
        let mut w = prelude(&[
            "chrono::{DateTime, Utc}",
            "serde::Serialize",
            "std::collections::HashMap",
            types_glob.as_str(),
            exceptions_glob.as_str(),
        ]);
        OperationGenerator::new(self.api, self.config, &self.mapper).generate_requests(&mut w)?;
        Ok(w.finish())
    }

    fn generate_methods(&self) -> Result<String, CodegenError> {
        let types_glob = format!("{}::*", self.config.types());
        let requests_glob = format!("{}::*", self.config.requests());
        let exceptions_glob = format!("{}::*", self.config.exceptions());
        let mut w = prelude(&[
            self.config.client(),
            self.config.envelope(),
            self.config.result(),
            "chrono::{DateTime, Utc}",
            "std::collections::HashMap",
            types_glob.as_str(),
            requests_glob.as_str(),
            exceptions_glob.as_str(),
        ]);
        OperationGenerator::new(self.api, self.config, &self.mapper).generate_methods(&mut w)?;
        Ok(w.finish())
    }

    fn generate_exceptions(&self) -> Result<String, CodegenError> {
        let mut w = prelude(&["serde::{Deserialize, Serialize}"]);
        ExceptionGenerator::new(self.api).generate(&mut w)?;
        Ok(w.finish())
    }
}

/// Starts a group with the banner, lint allowances and imports.
///
/// Single-segment paths name items already in scope and are not imported.
fn prelude(imports: &[&str]) -> CodeWriter {
    let mut w = CodeWriter::new();
    for line in BANNER.lines() {
        w.line(line);
    }
    w.blank();
    for lint in ALLOWED_LINTS {
        w.line(format!("#![allow({lint})]"));
    }
    w.blank();
    for path in imports.iter().filter(|p| p.contains("::")) {
        w.line(format!("use {path};"));
    }
    w.blank();
    w
}
