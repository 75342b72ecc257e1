//! API description validation.
//!
//! Structural checks live in the parser. This module covers the invariants
//! that span several elements: unique names and discriminants, and the
//! optional cross-reference check used by strict code generation.

use crate::error::SchemaViolation;
use crate::ir::{ApiDescription, EnumValue, Param};
use crate::types::{BUILTIN_SCALARS, TypeDescriptor};
use std::collections::HashSet;

/// A scalar name that matches neither a built-in nor a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Where the reference appears, e.g. `MarketFilter.textQuery`.
    pub location: String,
    /// The unresolved scalar name.
    pub type_name: String,
}

/// Validates a parsed API description.
///
/// # Errors
/// Returns `SchemaViolation` on duplicate declarations, duplicate operation
/// names, or duplicate value names or ids within an enumeration.
pub fn validate_api(api: &ApiDescription) -> Result<(), SchemaViolation> {
    validate_declarations(api)?;
    validate_operations(api)?;

    for simple in &api.simple_types {
        if let Some(values) = &simple.values {
            validate_values(&simple.name, values)?;
        }
    }
    for exception in &api.exception_types {
        validate_params(&exception.name, &exception.params)?;
    }
    for data_type in &api.data_types {
        validate_params(&data_type.name, &data_type.params)?;
    }
    for op in &api.operations {
        validate_params(&op.name, &op.params)?;
    }

    Ok(())
}

/// Lists every scalar reference that resolves to nothing.
///
/// Built-in scalars and names of declared simple, data and exception types
/// resolve. Order follows the document.
#[must_use]
pub fn unresolved_references(api: &ApiDescription) -> Vec<UnresolvedReference> {
    let mut unresolved = Vec::new();
    let mut check = |location: String, ty: &TypeDescriptor| {
        for name in ty.scalar_names() {
            if !BUILTIN_SCALARS.contains(&name) && !api.declares_type(name) {
                unresolved.push(UnresolvedReference {
                    location: location.clone(),
                    type_name: name.to_string(),
                });
            }
        }
    };

    for simple in &api.simple_types {
        check(simple.name.clone(), &simple.ty);
    }
    for data_type in &api.data_types {
        for param in &data_type.params {
            check(format!("{}.{}", data_type.name, param.name), &param.ty);
        }
    }
    for op in &api.operations {
        for param in &op.params {
            check(format!("{}.{}", op.name, param.name), &param.ty);
        }
        check(format!("{} response", op.name), &op.response.ty);
    }

    unresolved
}

/// Declared type names must be unique across all kinds.
fn validate_declarations(api: &ApiDescription) -> Result<(), SchemaViolation> {
    let mut seen = HashSet::new();

    let names = api
        .simple_types
        .iter()
        .map(|t| &t.name)
        .chain(api.data_types.iter().map(|t| &t.name))
        .chain(api.exception_types.iter().map(|t| &t.name));

    for name in names {
        if !seen.insert(name) {
            return Err(SchemaViolation::duplicate("type", name.as_str()));
        }
    }
    Ok(())
}

/// Operation names must be unique.
fn validate_operations(api: &ApiDescription) -> Result<(), SchemaViolation> {
    let mut seen = HashSet::new();
    for op in &api.operations {
        if !seen.insert(&op.name) {
            return Err(SchemaViolation::duplicate("operation", op.name.as_str()));
        }
    }
    Ok(())
}

/// Field names must be unique within a declaration; inline values must be valid.
fn validate_params(owner: &str, params: &[Param]) -> Result<(), SchemaViolation> {
    let mut seen = HashSet::new();
    for param in params {
        if !seen.insert(&param.name) {
            return Err(SchemaViolation::duplicate(
                "parameter",
                format!("{owner}.{}", param.name),
            ));
        }
        if let Some(values) = &param.values {
            validate_values(&format!("{owner}.{}", param.name), values)?;
        }
    }
    Ok(())
}

/// Value names and ids must be unique within an enumeration.
fn validate_values(enumeration: &str, values: &[EnumValue]) -> Result<(), SchemaViolation> {
    let mut seen_names = HashSet::new();
    let mut seen_ids = HashSet::new();

    for value in values {
        if !seen_names.insert(&value.name) {
            return Err(SchemaViolation::DuplicateValue {
                enumeration: enumeration.to_string(),
                value: value.name.clone(),
            });
        }
        if let Some(id) = value.id {
            if !seen_ids.insert(id) {
                return Err(SchemaViolation::DuplicateValue {
                    enumeration: enumeration.to_string(),
                    value: id.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_validate_duplicate_enum_value() {
        let xml = r#"<interface>
    <simpleType name="Side" type="string">
        <validValues>
            <value name="BACK"><description/></value>
            <value name="BACK"><description/></value>
        </validValues>
    </simpleType>
</interface>"#;

        assert!(matches!(
            parse_document(xml),
            Err(SchemaViolation::DuplicateValue { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_exception_id() {
        let xml = r#"<interface>
    <exceptionType name="E" prefix="E">
        <parameter name="errorCode" type="string">
            <validValues>
                <value id="1" name="A"><description/></value>
                <value id="1" name="B"><description/></value>
            </validValues>
        </parameter>
    </exceptionType>
</interface>"#;

        match parse_document(xml) {
            Err(SchemaViolation::DuplicateValue { value, .. }) => assert_eq!(value, "1"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_type_name() {
        let xml = r#"<interface>
    <simpleType name="Price" type="double"/>
    <dataType name="Price"/>
</interface>"#;

        assert!(matches!(
            parse_document(xml),
            Err(SchemaViolation::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_field_name() {
        let xml = r#"<interface>
    <dataType name="A">
        <parameter name="b" type="string"/>
        <parameter name="b" type="double"/>
    </dataType>
</interface>"#;

        assert!(matches!(
            parse_document(xml),
            Err(SchemaViolation::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_unresolved_references() {
        let xml = r#"<interface>
    <simpleType name="MarketId" type="string"/>
    <dataType name="Filter">
        <parameter name="ids" type="list(MarketId)"/>
        <parameter name="venue" type="Venue"/>
        <parameter name="scores" type="map(string,Score)"/>
    </dataType>
</interface>"#;

        let api = parse_document(xml).expect("Failed to parse");
        let unresolved = unresolved_references(&api);
        let names: Vec<_> = unresolved.iter().map(|r| r.type_name.as_str()).collect();

        assert_eq!(names, ["Venue", "Score"]);
        assert_eq!(unresolved[0].location, "Filter.venue");
    }
}
