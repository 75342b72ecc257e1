//! Schema type descriptors and the compact type grammar.
//!
//! Types are written in the document as a bare scalar name (`string`,
//! `MarketFilter`) or as one of three compound forms over scalar names:
//! `list(X)`, `set(X)` and `map(K,V)`. Compounds do not nest.

use crate::error::SchemaViolation;
use std::fmt;

/// Name of the string scalar.
pub const STRING_SCALAR: &str = "string";

/// Scalars understood by every generator without a declaration.
pub const BUILTIN_SCALARS: &[&str] = &[
    "string", "double", "float", "dateTime", "bool", "boolean", "int", "i32", "long", "i64",
];

/// A resolved schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeDescriptor {
    /// A scalar or named type.
    Scalar(String),
    /// `list(inner)`.
    List(Box<TypeDescriptor>),
    /// `set(inner)`.
    Set(Box<TypeDescriptor>),
    /// `map(key,value)`.
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Parses a raw type string.
    ///
    /// Whitespace is ignored anywhere in the string. Names inside compound
    /// forms must consist of ASCII letters and digits only; a bare name is
    /// taken as-is.
    ///
    /// # Errors
    /// Returns `SchemaViolation::MalformedType` for unbalanced parentheses,
    /// invalid characters, nested compounds or a `map` without exactly one
    /// comma.
    pub fn resolve(raw: &str) -> Result<Self, SchemaViolation> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(inner) = compound_interior(raw, &compact, "list")? {
            return Ok(Self::List(Box::new(inner_scalar(raw, inner)?)));
        }
        if let Some(inner) = compound_interior(raw, &compact, "set")? {
            return Ok(Self::Set(Box::new(inner_scalar(raw, inner)?)));
        }
        if let Some(inner) = compound_interior(raw, &compact, "map")? {
            let parts: Vec<&str> = inner.split(',').collect();
            let [key, value] = parts.as_slice() else {
                return Err(SchemaViolation::malformed_type(
                    raw,
                    format!("map takes exactly two arguments, found {}", parts.len()),
                ));
            };
            return Ok(Self::Map(
                Box::new(inner_scalar(raw, key)?),
                Box::new(inner_scalar(raw, value)?),
            ));
        }

        if compact.is_empty() {
            return Err(SchemaViolation::malformed_type(raw, "empty type name"));
        }
        Ok(Self::Scalar(compact))
    }

    /// Creates a scalar descriptor.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(name.into())
    }

    /// Returns the scalar name if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true for the string scalar.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.as_scalar() == Some(STRING_SCALAR)
    }

    /// Collects every scalar name referenced by this descriptor.
    #[must_use]
    pub fn scalar_names(&self) -> Vec<&str> {
        match self {
            Self::Scalar(name) => vec![name.as_str()],
            Self::List(inner) | Self::Set(inner) => inner.scalar_names(),
            Self::Map(key, value) => {
                let mut names = key.scalar_names();
                names.extend(value.scalar_names());
                names
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => f.write_str(name),
            Self::List(inner) => write!(f, "list({inner})"),
            Self::Set(inner) => write!(f, "set({inner})"),
            Self::Map(key, value) => write!(f, "map({key},{value})"),
        }
    }
}

/// Parses a raw type string. Shorthand for [`TypeDescriptor::resolve`].
///
/// # Errors
/// See [`TypeDescriptor::resolve`].
pub fn resolve_type(raw: &str) -> Result<TypeDescriptor, SchemaViolation> {
    TypeDescriptor::resolve(raw)
}

/// Returns the interior of `keyword(...)`, or `None` if `compact` is not that form.
fn compound_interior<'a>(
    raw: &str,
    compact: &'a str,
    keyword: &str,
) -> Result<Option<&'a str>, SchemaViolation> {
    let Some(rest) = compact
        .strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix('('))
    else {
        return Ok(None);
    };

    rest.strip_suffix(')')
        .map(Some)
        .ok_or_else(|| SchemaViolation::malformed_type(raw, format!("unterminated {keyword}(")))
}

/// Validates a scalar name inside a compound form.
fn inner_scalar(raw: &str, name: &str) -> Result<TypeDescriptor, SchemaViolation> {
    if name.is_empty() {
        return Err(SchemaViolation::malformed_type(raw, "empty type argument"));
    }
    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(SchemaViolation::malformed_type(
            raw,
            format!("invalid character '{bad}' in type argument '{name}'"),
        ));
    }
    Ok(TypeDescriptor::Scalar(name.to_string()))
}
