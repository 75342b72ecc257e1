//! Error types for schema parsing and validation.

use thiserror::Error;

/// A structural violation of the API description dialect.
///
/// Every violation is fatal: the generator never produces partial bindings
/// from a document that does not match the expected grammar exactly.
#[derive(Debug, Error)]
pub enum SchemaViolation {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed character or entity reference.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Element not accepted in this position.
    #[error("unexpected element '{element}' in context '{context}'")]
    UnexpectedElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Attributes present beyond the accepted set.
    #[error("unexpected attributes {attributes:?} on element '{element}'")]
    UnexpectedAttributes {
        /// Element name.
        element: String,
        /// Surplus attribute names, in document order.
        attributes: Vec<String>,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Required child element missing.
    #[error("missing required element '{element}' in context '{context}'")]
    MissingElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Child element that may occur only once appeared again.
    #[error("element '{element}' appears more than once in context '{context}'")]
    DuplicateElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Second `description` within one parent.
    #[error("duplicate description in context '{context}'")]
    DuplicateDescription {
        /// Parent context.
        context: String,
    },

    /// A `description` element with nested elements.
    #[error("description in context '{context}' contains element '{element}'")]
    DescriptionHasChildren {
        /// Parent context.
        context: String,
        /// First nested element name.
        element: String,
    },

    /// Non-whitespace text where only elements are allowed.
    #[error("unexpected text '{text}' in element '{element}'")]
    UnexpectedText {
        /// Element name.
        element: String,
        /// Offending text, trimmed.
        text: String,
    },

    /// Compound type string that does not match the type grammar.
    #[error("malformed type '{raw}': {reason}")]
    MalformedType {
        /// Raw type string as written in the document.
        raw: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Simple type enumeration over a non-string scalar.
    #[error("simple type '{name}' enumerates values but has underlying type '{type_name}'")]
    NonStringEnumeration {
        /// Simple type name.
        name: String,
        /// Declared underlying type.
        type_name: String,
    },

    /// Duplicate value name or discriminant within one enumeration.
    #[error("duplicate value '{value}' in enumeration '{enumeration}'")]
    DuplicateValue {
        /// Owning enumeration.
        enumeration: String,
        /// Repeated name or id.
        value: String,
    },

    /// Duplicate declaration.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, operation).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

impl SchemaViolation {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unexpected element error.
    pub fn unexpected_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates a missing element error.
    pub fn missing_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates a duplicate element error.
    pub fn duplicate_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::DuplicateElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates a malformed type error.
    pub fn malformed_type(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedType {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
