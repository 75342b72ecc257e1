//! Exception code generation.
//!
//! Each exception type contributes one enum built from its `errorCode`
//! values. Variants serialize as `"{prefix}-{id:04}"`, the code the service
//! reports in its error payloads.

use crate::error::CodegenError;
use crate::rust::enums::{VariantDecl, write_enum};
use crate::rust::names::rust_ident;
use crate::writer::{CodeWriter, string_literal};
use rpcgen_schema::{ApiDescription, EnumValue, ExceptionType};

/// Formats the wire tag of an exception value.
#[must_use]
pub fn error_tag(prefix: &str, id: u32) -> String {
    format!("{prefix}-{id:04}")
}

/// Generator for exception code enumerations.
pub struct ExceptionGenerator<'a> {
    api: &'a ApiDescription,
}

impl<'a> ExceptionGenerator<'a> {
    /// Creates a new exception generator.
    #[must_use]
    pub fn new(api: &'a ApiDescription) -> Self {
        Self { api }
    }

    /// Generates an enum for every exception type with enumerated error codes.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name cannot be emitted or a value has no id.
    pub fn generate(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for exception in &self.api.exception_types {
            self.generate_exception(w, exception)?;
        }
        Ok(())
    }

    fn generate_exception(
        &self,
        w: &mut CodeWriter,
        exception: &ExceptionType,
    ) -> Result<(), CodegenError> {
        for param in exception.params.iter().filter(|p| p.name != ExceptionType::ERROR_CODE) {
            tracing::debug!(
                exception_type = %exception.name,
                parameter = %param.name,
                "skipping exception parameter"
            );
        }

        let Some(values) = exception.error_code().and_then(|p| p.values.as_deref()) else {
            tracing::warn!(
                exception_type = %exception.name,
                "exception type has no enumerated errorCode, nothing generated"
            );
            return Ok(());
        };

        let name = rust_ident(&exception.name, "exception type")?;
        let tags = values
            .iter()
            .map(|value| tag_of(exception, value))
            .collect::<Result<Vec<_>, _>>()?;
        let variants = values
            .iter()
            .zip(&tags)
            .map(|(value, tag)| {
                VariantDecl::plan(value, &exception.name).map(|mut variant| {
                    variant.rename = Some(tag.clone());
                    variant
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(exception_type = %name, codes = variants.len(), "generating exception");

        write_enum(w, &name, exception.description.as_deref(), &variants);
        w.blank();
        w.block(format!("impl {name}"), |w| {
            w.doc("Returns the error code reported by the service.");
            w.block("pub const fn code(&self) -> &'static str", |w| {
                w.block("match self", |w| {
                    for (variant, tag) in variants.iter().zip(&tags) {
                        w.line(format!(
                            "Self::{} => {},",
                            variant.ident,
                            string_literal(tag)
                        ));
                    }
                });
            });
        });
        w.blank();
        Ok(())
    }
}

fn tag_of(exception: &ExceptionType, value: &EnumValue) -> Result<String, CodegenError> {
    let id = value.id.ok_or_else(|| {
        CodegenError::generation(format!(
            "value '{}' of exception type '{}' has no id",
            value.name, exception.name
        ))
    })?;
    Ok(error_tag(&exception.prefix, id))
}
