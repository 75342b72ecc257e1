//! Schema type to Rust type mapping.
//!
//! Resolution order: scalar overrides, exact compound overrides, generic
//! compound translation, then pass-through of the scalar name. `set(X)`
//! deliberately maps to `Vec` like `list(X)`: the wire encoding is a JSON
//! array and no uniqueness is guaranteed by the service.

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::rust::names::{is_identifier, sanitize_ident};
use rpcgen_schema::{ApiDescription, TypeDescriptor};
use std::collections::{HashMap, HashSet};

/// Default scalar overrides.
const SCALARS: &[(&str, &str)] = &[
    ("double", "f64"),
    ("float", "f32"),
    ("string", "String"),
    ("dateTime", "DateTime<Utc>"),
    ("bool", "bool"),
    ("boolean", "bool"),
    ("int", "i32"),
    ("i32", "i32"),
    ("long", "i64"),
    ("i64", "i64"),
];

/// Maps type descriptors to Rust type expressions.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    scalars: HashMap<String, String>,
    compounds: HashMap<TypeDescriptor, String>,
    declared: HashSet<String>,
    strict: bool,
}

impl TypeMapper {
    /// Creates a mapper for an API description.
    ///
    /// Overrides from `config` replace defaults with the same key.
    #[must_use]
    pub fn new(config: &CodegenConfig, api: &ApiDescription) -> Self {
        let mut scalars: HashMap<String, String> = SCALARS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        scalars.extend(config.scalar_overrides().iter().cloned());

        let string = || Box::new(TypeDescriptor::scalar("string"));
        let mut compounds = HashMap::new();
        compounds.insert(TypeDescriptor::Set(string()), "Vec<String>".to_string());
        compounds.insert(
            TypeDescriptor::Map(string(), string()),
            "HashMap<String, String>".to_string(),
        );
        compounds.extend(config.compound_overrides().iter().cloned());

        let declared = api
            .simple_types
            .iter()
            .map(|t| t.name.clone())
            .chain(api.data_types.iter().map(|t| t.name.clone()))
            .chain(api.exception_types.iter().map(|t| t.name.clone()))
            .collect();

        Self {
            scalars,
            compounds,
            declared,
            strict: config.is_strict(),
        }
    }

    /// Maps a type, wrapping it in `Option` unless `mandatory`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnmappedType` in strict mode for a scalar that
    /// is neither overridden nor declared, and `InvalidIdentifier` for a
    /// passed-through name that is not a Rust identifier.
    pub fn map_type(&self, ty: &TypeDescriptor, mandatory: bool) -> Result<String, CodegenError> {
        let mapped = self.map_required(ty)?;
        if mandatory {
            Ok(mapped)
        } else {
            Ok(format!("Option<{mapped}>"))
        }
    }

    /// Returns true if a scalar name has an override or a declaration.
    #[must_use]
    pub fn resolves(&self, name: &str) -> bool {
        self.scalars.contains_key(name) || self.declared.contains(name)
    }

    fn map_required(&self, ty: &TypeDescriptor) -> Result<String, CodegenError> {
        if let Some(rust) = ty.as_scalar().and_then(|name| self.scalars.get(name)) {
            return Ok(rust.clone());
        }
        if let Some(rust) = self.compounds.get(ty) {
            return Ok(rust.clone());
        }

        match ty {
            TypeDescriptor::Scalar(name) => self.pass_through(name),
            TypeDescriptor::List(inner) | TypeDescriptor::Set(inner) => {
                Ok(format!("Vec<{}>", self.map_required(inner)?))
            }
            TypeDescriptor::Map(key, value) => Ok(format!(
                "HashMap<{}, {}>",
                self.map_required(key)?,
                self.map_required(value)?
            )),
        }
    }

    /// Emits a scalar name as a type reference, escaped like its declaration.
    fn pass_through(&self, name: &str) -> Result<String, CodegenError> {
        if !is_identifier(name) {
            return Err(CodegenError::InvalidIdentifier {
                name: name.to_string(),
                context: "type reference".to_string(),
            });
        }
        if !self.declared.contains(name) {
            if self.strict {
                return Err(CodegenError::UnmappedType {
                    type_name: name.to_string(),
                });
            }
            tracing::debug!(type_name = name, "passing through undeclared type name");
        }
        Ok(sanitize_ident(name).into_owned())
    }
}
