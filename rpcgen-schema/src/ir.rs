//! Intermediate representation of an API description.
//!
//! Entities are built once, bottom-up, by the parser and are not mutated
//! afterwards. Every collection keeps document order so that emitted code is
//! deterministic.

use crate::types::TypeDescriptor;

/// One value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name, unique within its enumeration.
    pub name: String,
    /// Numeric wire discriminant (exception enumerations only).
    pub id: Option<u32>,
    /// Description.
    pub description: Option<String>,
}

impl EnumValue {
    /// Creates a value without id or description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            description: None,
        }
    }
}

/// A request parameter or struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Field name as written on the wire.
    pub name: String,
    /// Field type.
    pub ty: TypeDescriptor,
    /// Whether the field must be present.
    pub mandatory: bool,
    /// Description.
    pub description: Option<String>,
    /// Inline enumeration values.
    pub values: Option<Vec<EnumValue>>,
}

impl Param {
    /// Creates a parameter without description or values.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDescriptor, mandatory: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            mandatory,
            description: None,
            values: None,
        }
    }
}

/// The successful response of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResponse {
    /// Response type.
    pub ty: TypeDescriptor,
    /// Description.
    pub description: Option<String>,
}

/// Reference from an operation to an exception type it may raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRef {
    /// Exception type name.
    pub type_name: String,
    /// Description.
    pub description: Option<String>,
}

/// A remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation name.
    pub name: String,
    /// Version tag the operation was introduced in.
    pub since: String,
    /// Description.
    pub description: Option<String>,
    /// Request parameters.
    pub params: Vec<Param>,
    /// Response.
    pub response: SimpleResponse,
    /// Exceptions the operation may raise.
    pub exceptions: Vec<ExceptionRef>,
}

impl Operation {
    /// Returns the request struct name, or `None` if the operation takes no parameters.
    #[must_use]
    pub fn request_name(&self) -> Option<String> {
        (!self.params.is_empty()).then(|| format!("{}Request", self.name))
    }
}

/// A structured data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields.
    pub params: Vec<Param>,
}

/// An exception type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionType {
    /// Type name.
    pub name: String,
    /// Prefix of wire-level error codes.
    pub prefix: String,
    /// Description.
    pub description: Option<String>,
    /// Parameters; conventionally one `errorCode` with enumerated values.
    pub params: Vec<Param>,
}

impl ExceptionType {
    /// Name of the parameter carrying the enumerated error codes.
    pub const ERROR_CODE: &'static str = "errorCode";

    /// Returns the `errorCode` parameter, if declared.
    #[must_use]
    pub fn error_code(&self) -> Option<&Param> {
        self.params.iter().find(|p| p.name == Self::ERROR_CODE)
    }
}

/// A named scalar alias or closed string enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleType {
    /// Type name.
    pub name: String,
    /// Underlying type.
    pub ty: TypeDescriptor,
    /// Description.
    pub description: Option<String>,
    /// Enumeration values; the underlying type is then `string`.
    pub values: Option<Vec<EnumValue>>,
}

impl SimpleType {
    /// Returns true if this simple type is an enumeration.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.values.is_some()
    }
}

/// A parsed API description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiDescription {
    /// Interface name from the root element, if present.
    pub name: Option<String>,
    /// Interface version from the root element, if present.
    pub version: Option<String>,
    /// Top-level description.
    pub description: Option<String>,
    /// Operations.
    pub operations: Vec<Operation>,
    /// Data types.
    pub data_types: Vec<DataType>,
    /// Exception types.
    pub exception_types: Vec<ExceptionType>,
    /// Simple types.
    pub simple_types: Vec<SimpleType>,
}

impl ApiDescription {
    /// Returns true if a simple, data or exception type with this name is declared.
    #[must_use]
    pub fn declares_type(&self, name: &str) -> bool {
        self.simple_types.iter().any(|t| t.name == name)
            || self.data_types.iter().any(|t| t.name == name)
            || self.exception_types.iter().any(|t| t.name == name)
    }

    /// Looks up a simple type by name.
    #[must_use]
    pub fn simple_type(&self, name: &str) -> Option<&SimpleType> {
        self.simple_types.iter().find(|t| t.name == name)
    }

    /// Looks up a data type by name.
    #[must_use]
    pub fn data_type(&self, name: &str) -> Option<&DataType> {
        self.data_types.iter().find(|t| t.name == name)
    }

    /// Looks up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(params: Vec<Param>) -> Operation {
        Operation {
            name: "listEvents".to_string(),
            since: "1.0.0".to_string(),
            description: None,
            params,
            response: SimpleResponse {
                ty: TypeDescriptor::scalar("string"),
                description: None,
            },
            exceptions: Vec::new(),
        }
    }

    #[test]
    fn test_request_name() {
        assert_eq!(operation(Vec::new()).request_name(), None);
        let op = operation(vec![Param::new("locale", TypeDescriptor::scalar("string"), false)]);
        assert_eq!(op.request_name().as_deref(), Some("listEventsRequest"));
    }

    #[test]
    fn test_error_code_lookup() {
        let exception = ExceptionType {
            name: "APINGException".to_string(),
            prefix: "ANGX".to_string(),
            description: None,
            params: vec![
                Param::new("requestUUID", TypeDescriptor::scalar("string"), false),
                Param::new("errorCode", TypeDescriptor::scalar("string"), false),
            ],
        };
        assert_eq!(exception.error_code().map(|p| p.name.as_str()), Some("errorCode"));
    }

    #[test]
    fn test_declares_type() {
        let api = ApiDescription {
            data_types: vec![DataType {
                name: "MarketFilter".to_string(),
                description: None,
                params: Vec::new(),
            }],
            ..ApiDescription::default()
        };
        assert!(api.declares_type("MarketFilter"));
        assert!(api.data_type("MarketFilter").is_some());
        assert!(!api.declares_type("Unknown"));
    }
}
