//! Code generation settings.

use rpcgen_schema::TypeDescriptor;

/// Builder-style configuration for a generation run.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    service_name: String,
    version: String,
    client_path: String,
    envelope_path: String,
    result_path: String,
    types_module: String,
    requests_module: String,
    exceptions_module: String,
    scalar_overrides: Vec<(String, String)>,
    compound_overrides: Vec<(TypeDescriptor, String)>,
    strict_type_references: bool,
}

impl CodegenConfig {
    /// Creates a configuration for the given service and wire version.
    ///
    /// Operations are called as `"{service_name}/{version}/{operation}"`.
    #[must_use]
    pub fn new(service_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: version.into(),
            client_path: "crate::client::Client".to_string(),
            envelope_path: "crate::json_rpc::RpcRequest".to_string(),
            result_path: "crate::result::Result".to_string(),
            types_module: "crate::generated_types".to_string(),
            requests_module: "crate::generated_requests".to_string(),
            exceptions_module: "crate::generated_exceptions".to_string(),
            scalar_overrides: Vec::new(),
            compound_overrides: Vec::new(),
            strict_type_references: false,
        }
    }

    /// Sets the path of the client type the methods are implemented on.
    #[must_use]
    pub fn client_path(mut self, path: impl Into<String>) -> Self {
        self.client_path = path.into();
        self
    }

    /// Sets the path of the request envelope type.
    #[must_use]
    pub fn envelope_path(mut self, path: impl Into<String>) -> Self {
        self.envelope_path = path.into();
        self
    }

    /// Sets the path of the single-parameter `Result` alias methods return.
    #[must_use]
    pub fn result_path(mut self, path: impl Into<String>) -> Self {
        self.result_path = path.into();
        self
    }

    /// Sets the module the type declarations are compiled into.
    #[must_use]
    pub fn types_module(mut self, path: impl Into<String>) -> Self {
        self.types_module = path.into();
        self
    }

    /// Sets the module the request structs are compiled into.
    #[must_use]
    pub fn requests_module(mut self, path: impl Into<String>) -> Self {
        self.requests_module = path.into();
        self
    }

    /// Sets the module the exception enums are compiled into.
    #[must_use]
    pub fn exceptions_module(mut self, path: impl Into<String>) -> Self {
        self.exceptions_module = path.into();
        self
    }

    /// Maps a scalar name to a Rust type, taking precedence over the defaults.
    #[must_use]
    pub fn scalar_override(mut self, name: impl Into<String>, rust_type: impl Into<String>) -> Self {
        self.scalar_overrides.push((name.into(), rust_type.into()));
        self
    }

    /// Maps an exact compound shape to a Rust type.
    #[must_use]
    pub fn compound_override(mut self, ty: TypeDescriptor, rust_type: impl Into<String>) -> Self {
        self.compound_overrides.push((ty, rust_type.into()));
        self
    }

    /// Enables or disables rejection of scalar names that match no declaration.
    #[must_use]
    pub fn strict_type_references(mut self, strict: bool) -> Self {
        self.strict_type_references = strict;
        self
    }

    /// Returns the service name.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the wire version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the wire method name of an operation.
    #[must_use]
    pub fn wire_method(&self, operation: &str) -> String {
        format!("{}/{}/{}", self.service_name, self.version, operation)
    }

    /// Returns the client type path.
    #[must_use]
    pub fn client(&self) -> &str {
        &self.client_path
    }

    /// Returns the client type name (last path segment).
    #[must_use]
    pub fn client_name(&self) -> &str {
        last_segment(&self.client_path)
    }

    /// Returns the envelope type path.
    #[must_use]
    pub fn envelope(&self) -> &str {
        &self.envelope_path
    }

    /// Returns the envelope type name (last path segment).
    #[must_use]
    pub fn envelope_name(&self) -> &str {
        last_segment(&self.envelope_path)
    }

    /// Returns the result alias path.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result_path
    }

    /// Returns the result alias name (last path segment).
    #[must_use]
    pub fn result_name(&self) -> &str {
        last_segment(&self.result_path)
    }

    /// Returns the module path of type declarations.
    #[must_use]
    pub fn types(&self) -> &str {
        &self.types_module
    }

    /// Returns the module path of request structs.
    #[must_use]
    pub fn requests(&self) -> &str {
        &self.requests_module
    }

    /// Returns the module path of exception enums.
    #[must_use]
    pub fn exceptions(&self) -> &str {
        &self.exceptions_module
    }

    /// Returns the extra scalar overrides.
    #[must_use]
    pub fn scalar_overrides(&self) -> &[(String, String)] {
        &self.scalar_overrides
    }

    /// Returns the extra compound overrides.
    #[must_use]
    pub fn compound_overrides(&self) -> &[(TypeDescriptor, String)] {
        &self.compound_overrides
    }

    /// Returns true if unresolved scalar names are rejected.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict_type_references
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_method() {
        let config = CodegenConfig::new("SportsAPING", "v1.0");
        assert_eq!(config.wire_method("listEvents"), "SportsAPING/v1.0/listEvents");
    }

    #[test]
    fn test_path_names() {
        let config = CodegenConfig::new("S", "v1")
            .client_path("crate::client::BFClient")
            .envelope_path("RpcRequest");

        assert_eq!(config.client_name(), "BFClient");
        assert_eq!(config.envelope_name(), "RpcRequest");
        assert_eq!(config.result_name(), "Result");
        assert_eq!(config.exceptions(), "crate::generated_exceptions");
        assert!(!config.is_strict());
    }
}
