//! Enumeration code generation.

use crate::error::CodegenError;
use crate::rust::names::rust_ident;
use crate::writer::{CodeWriter, string_literal};
use rpcgen_schema::{ApiDescription, EnumValue, SchemaViolation, SimpleType};

/// Derives on closed string enumerations.
const ENUM_DERIVE: &str = "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]";

/// A variant ready to be written.
pub(crate) struct VariantDecl<'a> {
    /// Sanitized Rust identifier.
    pub ident: String,
    /// Wire label, when it differs from the identifier.
    pub rename: Option<String>,
    /// Variant documentation.
    pub description: Option<&'a str>,
}

impl<'a> VariantDecl<'a> {
    /// Plans a variant serialized under its own name.
    pub(crate) fn plan(value: &'a EnumValue, owner: &str) -> Result<Self, CodegenError> {
        let ident = rust_ident(&value.name, &format!("{owner} variant"))?;
        let rename = (ident != value.name.as_str()).then(|| value.name.clone());
        Ok(Self {
            ident: ident.into_owned(),
            rename,
            description: value.description.as_deref(),
        })
    }
}

/// Writes an enum, one variant per planned value.
pub(crate) fn write_enum(
    w: &mut CodeWriter,
    name: &str,
    description: Option<&str>,
    variants: &[VariantDecl<'_>],
) {
    w.doc_opt(description);
    w.line(ENUM_DERIVE);
    w.block(format!("pub enum {name}"), |w| {
        for variant in variants {
            w.doc_opt(variant.description);
            if let Some(rename) = &variant.rename {
                w.line(format!("#[serde(rename = {})]", string_literal(rename)));
            }
            w.line(format!("{},", variant.ident));
        }
    });
}

/// Generator for simple types with enumerated values.
pub struct EnumGenerator<'a> {
    api: &'a ApiDescription,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(api: &'a ApiDescription) -> Self {
        Self { api }
    }

    /// Generates every enumerated simple type, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name cannot be emitted or an enumeration
    /// is not string-typed.
    pub fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for simple in &self.api.simple_types {
            if let Some(values) = &simple.values {
                self.generate_enum(w, simple, values)?;
            }
        }
        Ok(())
    }

    fn generate_enum(
        &self,
        w: &mut CodeWriter,
        simple: &SimpleType,
        values: &[EnumValue],
    ) -> Result<(), CodegenError> {
        if !simple.ty.is_string() {
            return Err(SchemaViolation::NonStringEnumeration {
                name: simple.name.clone(),
                type_name: simple.ty.to_string(),
            }
            .into());
        }

        let name = rust_ident(&simple.name, "simple type")?;
        let variants = values
            .iter()
            .map(|value| VariantDecl::plan(value, &simple.name))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(enumeration = %name, variants = variants.len(), "generating enum");

        write_enum(w, &name, simple.description.as_deref(), &variants);
        w.blank();
        Ok(())
    }
}
