//! Request struct and client method code generation.

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::rust::mapper::TypeMapper;
use crate::rust::names::rust_ident;
use crate::rust::types::{FieldDecl, write_struct};
use crate::writer::{CodeWriter, string_literal};
use rpcgen_schema::{ApiDescription, Operation};

/// Derives on request structs; requests are only ever sent.
const REQUEST_DERIVE: &str = "#[derive(Debug, Clone, Serialize)]";

/// Generator for operation request structs and client methods.
pub struct OperationGenerator<'a> {
    api: &'a ApiDescription,
    config: &'a CodegenConfig,
    mapper: &'a TypeMapper,
}

impl<'a> OperationGenerator<'a> {
    /// Creates a new operation generator.
    #[must_use]
    pub fn new(api: &'a ApiDescription, config: &'a CodegenConfig, mapper: &'a TypeMapper) -> Self {
        Self {
            api,
            config,
            mapper,
        }
    }

    /// Generates a request struct for every operation with parameters.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be emitted.
    pub fn generate_requests(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for op in &self.api.operations {
            let Some(request_name) = op.request_name() else {
                continue;
            };
            let name = rust_ident(&request_name, "request struct")?;
            let fields = FieldDecl::plan_all(&op.params, &request_name, self.mapper)?;

            write_struct(w, &name, None, REQUEST_DERIVE, &fields);
            w.blank();
        }
        Ok(())
    }

    /// Generates one `impl` block on the client type holding every operation.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be emitted.
    pub fn generate_methods(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        let methods = self
            .api
            .operations
            .iter()
            .map(|op| self.plan_method(op))
            .collect::<Result<Vec<_>, _>>()?;

        w.block(format!("impl {}", self.config.client_name()), |w| {
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    w.blank();
                }
                method.write(w);
            }
        });
        Ok(())
    }

    fn plan_method(&self, op: &Operation) -> Result<MethodDecl, CodegenError> {
        let name = rust_ident(&op.name, "operation")?.into_owned();
        let args = op
            .params
            .iter()
            .map(|param| {
                let ident = rust_ident(&param.name, &format!("{} parameter", op.name))?;
                let ty = self.mapper.map_type(&param.ty, param.mandatory)?;
                Ok(format!("{ident}: {ty}"))
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;
        let fields = op
            .params
            .iter()
            .map(|param| rust_ident(&param.name, "parameter").map(|i| i.into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        let response = self.mapper.map_type(&op.response.ty, true)?;

        tracing::debug!(operation = %name, params = args.len(), "generating method");

        Ok(MethodDecl {
            doc: method_doc(op),
            signature: format!(
                "pub fn {name}(&self{}) -> {}<{response}>",
                args.iter().map(|a| format!(", {a}")).collect::<String>(),
                self.config.result_name(),
            ),
            request: op
                .request_name()
                .map(|request| format!("{request} {{ {} }}", fields.join(", ")))
                .unwrap_or_else(|| "()".to_string()),
            envelope: self.config.envelope_name().to_string(),
            wire_method: self.config.wire_method(&op.name),
        })
    }
}

/// A client method ready to be written.
struct MethodDecl {
    doc: String,
    signature: String,
    request: String,
    envelope: String,
    wire_method: String,
}

impl MethodDecl {
    fn write(&self, w: &mut CodeWriter) {
        w.doc(&self.doc);
        w.block(&self.signature, |w| {
            w.line(format!("let req = {};", self.request));
            w.line(format!(
                "let rpc_request = {}::new({}.to_owned(), req);",
                self.envelope,
                string_literal(&self.wire_method)
            ));
            w.line("self.req(rpc_request)");
        });
    }
}

/// Builds the doc comment of an operation method.
fn method_doc(op: &Operation) -> String {
    let mut sections = Vec::new();
    if let Some(description) = &op.description {
        sections.push(description.clone());
    }
    sections.push(format!("Since: {}", op.since));

    if !op.exceptions.is_empty() {
        let mut errors = String::from("# Errors");
        for exception in &op.exceptions {
            match &exception.description {
                Some(description) => {
                    errors.push_str(&format!("\n* `{}` - {description}", exception.type_name));
                }
                None => errors.push_str(&format!("\n* `{}`", exception.type_name)),
            }
        }
        sections.push(errors);
    }

    sections.join("\n\n")
}
