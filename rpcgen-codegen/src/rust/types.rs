//! Type alias and struct code generation.

use crate::error::CodegenError;
use crate::rust::mapper::TypeMapper;
use crate::rust::names::rust_ident;
use crate::writer::{CodeWriter, string_literal};
use rpcgen_schema::{ApiDescription, DataType, Param, SimpleType};

/// Derives on data type structs.
const STRUCT_DERIVE: &str = "#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]";

/// A struct field ready to be written.
#[derive(Debug, Clone)]
pub(crate) struct FieldDecl {
    /// Name on the wire.
    pub wire_name: String,
    /// Sanitized Rust identifier.
    pub ident: String,
    /// Mapped Rust type, including any `Option` wrapper.
    pub rust_type: String,
    /// Whether the field is optional.
    pub optional: bool,
    /// Field documentation.
    pub description: Option<String>,
}

impl FieldDecl {
    /// Resolves a parameter into a field declaration.
    pub(crate) fn plan(
        param: &Param,
        owner: &str,
        mapper: &TypeMapper,
    ) -> Result<Self, CodegenError> {
        let ident = rust_ident(&param.name, &format!("{owner} field"))?.into_owned();
        Ok(Self {
            wire_name: param.name.clone(),
            ident,
            rust_type: mapper.map_type(&param.ty, param.mandatory)?,
            optional: !param.mandatory,
            description: param.description.clone(),
        })
    }

    /// Resolves every parameter of a declaration, in order.
    pub(crate) fn plan_all(
        params: &[Param],
        owner: &str,
        mapper: &TypeMapper,
    ) -> Result<Vec<Self>, CodegenError> {
        params
            .iter()
            .map(|param| Self::plan(param, owner, mapper))
            .collect()
    }
}

/// Writes a struct with public fields.
///
/// Optional fields are skipped when serializing instead of being sent as
/// `null`. Fields whose identifier differs from the wire name keep the wire
/// name through `serde(rename)`.
pub(crate) fn write_struct(
    w: &mut CodeWriter,
    name: &str,
    description: Option<&str>,
    derive: &str,
    fields: &[FieldDecl],
) {
    w.doc_opt(description);
    w.line(derive);

    if fields.is_empty() {
        w.line(format!("pub struct {name} {{}}"));
        return;
    }

    w.block(format!("pub struct {name}"), |w| {
        for field in fields {
            w.doc_opt(field.description.as_deref());
            if field.ident != field.wire_name {
                w.line(format!(
                    "#[serde(rename = {})]",
                    string_literal(&field.wire_name)
                ));
            }
            if field.optional {
                w.line("#[serde(skip_serializing_if = \"Option::is_none\")]");
            }
            w.line(format!("pub {}: {},", field.ident, field.rust_type));
        }
    });
}

/// Generator for simple type aliases and data type structs.
pub struct TypeGenerator<'a> {
    api: &'a ApiDescription,
    mapper: &'a TypeMapper,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(api: &'a ApiDescription, mapper: &'a TypeMapper) -> Self {
        Self { api, mapper }
    }

    /// Generates aliases for every non-enumerated simple type.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be emitted.
    pub fn generate_aliases(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for simple in self.api.simple_types.iter().filter(|t| !t.is_enum()) {
            self.generate_alias(w, simple)?;
        }
        Ok(())
    }

    /// Generates a struct for every data type.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name or type cannot be emitted.
    pub fn generate_structs(&self, w: &mut CodeWriter) -> Result<(), CodegenError> {
        for data_type in &self.api.data_types {
            self.generate_struct(w, data_type)?;
        }
        Ok(())
    }

    fn generate_alias(&self, w: &mut CodeWriter, simple: &SimpleType) -> Result<(), CodegenError> {
        let name = rust_ident(&simple.name, "simple type")?;
        let target = self.mapper.map_type(&simple.ty, true)?;

        w.doc_opt(simple.description.as_deref());
        w.line(format!("pub type {name} = {target};"));
        w.blank();
        Ok(())
    }

    fn generate_struct(&self, w: &mut CodeWriter, data_type: &DataType) -> Result<(), CodegenError> {
        let name = rust_ident(&data_type.name, "data type")?;
        let fields = FieldDecl::plan_all(&data_type.params, &data_type.name, self.mapper)?;

        tracing::debug!(data_type = %name, fields = fields.len(), "generating struct");

        write_struct(
            w,
            &name,
            data_type.description.as_deref(),
            STRUCT_DERIVE,
            &fields,
        );
        w.blank();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodegenConfig;
    use rpcgen_schema::parse_document;

    const TYPES_XML: &str = r#"<interface name="Test">
    <simpleType name="MarketId" type="string">
        <description>Market identifier</description>
    </simpleType>
    <simpleType name="Side" type="string">
        <validValues>
            <value name="BACK"><description/></value>
        </validValues>
    </simpleType>
    <dataType name="MarketFilter">
        <description>
            A container defining
            the markets to select
        </description>
        <parameter name="marketIds" type="set(MarketId)">
            <description>Restrict to these markets</description>
        </parameter>
        <parameter name="type" type="string" mandatory="true"/>
        <parameter name="from" type="dateTime" mandatory="false"/>
    </dataType>
    <dataType name="Empty"/>
</interface>"#;

    fn generate(xml: &str) -> (String, String) {
        let api = parse_document(xml).expect("Failed to parse");
        let mapper = TypeMapper::new(&CodegenConfig::new("S", "v1"), &api);
        let generator = TypeGenerator::new(&api, &mapper);

        let mut aliases = CodeWriter::new();
        generator.generate_aliases(&mut aliases).expect("aliases");
        let mut structs = CodeWriter::new();
        generator.generate_structs(&mut structs).expect("structs");
        (aliases.finish(), structs.finish())
    }

    #[test]
    fn test_generate_alias() {
        let (aliases, _) = generate(TYPES_XML);

        assert!(aliases.contains("/// Market identifier\npub type MarketId = String;"));
        assert!(!aliases.contains("Side"));
    }

    #[test]
    fn test_generate_struct() {
        let (_, structs) = generate(TYPES_XML);

        assert!(structs.contains("/// A container defining the markets to select\n"));
        assert!(structs.contains("pub struct MarketFilter {"));
        assert!(structs.contains(
            "    /// Restrict to these markets\n    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub marketIds: Option<Vec<MarketId>>,"
        ));
        assert!(structs.contains("    #[serde(rename = \"type\")]\n    pub r#type: String,"));
        assert!(structs.contains("pub from: Option<DateTime<Utc>>,"));
        assert!(structs.contains("pub struct Empty {}"));
    }

    #[test]
    fn test_optional_iff_not_mandatory() {
        let (_, structs) = generate(TYPES_XML);

        for line in structs.lines().filter(|l| l.trim_start().starts_with("pub ") && l.ends_with(',')) {
            let optional = line.contains(": Option<");
            let is_type = line.contains("r#type");
            assert_eq!(optional, !is_type, "{line}");
        }
    }

    #[test]
    fn test_invalid_field_name() {
        let xml = r#"<interface><dataType name="A"><parameter name="bad-name" type="string"/></dataType></interface>"#;
        let api = parse_document(xml).expect("Failed to parse");
        let mapper = TypeMapper::new(&CodegenConfig::new("S", "v1"), &api);
        let mut w = CodeWriter::new();

        assert!(matches!(
            TypeGenerator::new(&api, &mapper).generate_structs(&mut w),
            Err(CodegenError::InvalidIdentifier { .. })
        ));
    }
}
