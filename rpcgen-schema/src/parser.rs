//! API description parser.
//!
//! Walks the XML element tree node by node. Every step names the attributes
//! and child elements it accepts; anything else is a [`SchemaViolation`].
//! This keeps generated bindings from silently drifting away from the
//! document when the dialect grows new constructs.

use crate::error::SchemaViolation;
use crate::ir::{
    ApiDescription, DataType, EnumValue, ExceptionRef, ExceptionType, Operation, Param,
    SimpleResponse, SimpleType,
};
use crate::types::TypeDescriptor;
use crate::validation::validate_api;
use crate::xml::{XmlElement, parse_xml};

/// Which declaration a parameter or value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentKind {
    Operation,
    DataType,
    ExceptionType,
    SimpleType,
}

/// Parses an API description from an XML string.
///
/// # Arguments
/// * `xml` - Document content
///
/// # Returns
/// Parsed and validated API description.
///
/// # Errors
/// Returns `SchemaViolation` if the XML is malformed or deviates from the dialect.
pub fn parse_document(xml: &str) -> Result<ApiDescription, SchemaViolation> {
    let root = parse_xml(xml)?;
    parse(&root)
}

/// Parses an API description from its root element.
///
/// Attributes on the root element are not validated; `name` and `version`
/// are recorded when present.
///
/// # Errors
/// Returns `SchemaViolation` on any unexpected element, attribute or text.
pub fn parse(root: &XmlElement) -> Result<ApiDescription, SchemaViolation> {
    ensure_no_text(root)?;

    let mut api = ApiDescription {
        name: root.attribute("name").map(str::to_string),
        version: root.attribute("version").map(str::to_string),
        ..ApiDescription::default()
    };
    let mut description = DescriptionSlot::new(root.name().to_string());

    for child in root.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "operation" => api.operations.push(parse_operation(child)?),
            "dataType" => api.data_types.push(parse_data_type(child)?),
            "exceptionType" => api.exception_types.push(parse_exception_type(child)?),
            "simpleType" => api.simple_types.push(parse_simple_type(child)?),
            other => return Err(SchemaViolation::unexpected_element(other, root.name())),
        }
    }
    api.description = description.into_inner();

    validate_api(&api)?;

    tracing::debug!(
        operations = api.operations.len(),
        data_types = api.data_types.len(),
        exception_types = api.exception_types.len(),
        simple_types = api.simple_types.len(),
        "parsed API description"
    );

    Ok(api)
}

/// Normalizes free text: trims every line, drops blank lines, joins with
/// single spaces. Returns `None` when nothing is left.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let joined = raw
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!joined.is_empty()).then_some(joined)
}

/// Checks the attribute allow-list and returns the required values in order.
///
/// Fails listing every attribute outside `required` and `optional`, then on
/// the first missing required attribute.
fn attributes<'a, const N: usize>(
    el: &'a XmlElement,
    required: [&str; N],
    optional: &[&str],
) -> Result<[&'a str; N], SchemaViolation> {
    let surplus: Vec<String> = el
        .attributes()
        .map(|(key, _)| key)
        .filter(|key| !required.contains(key) && !optional.contains(key))
        .map(str::to_string)
        .collect();

    if !surplus.is_empty() {
        return Err(SchemaViolation::UnexpectedAttributes {
            element: el.name().to_string(),
            attributes: surplus,
        });
    }

    let mut values = [""; N];
    for (slot, key) in values.iter_mut().zip(required) {
        *slot = el
            .attribute(key)
            .ok_or_else(|| SchemaViolation::missing_attr(el.name(), key))?;
    }

    Ok(values)
}

/// Rejects non-whitespace text directly inside a structural element.
fn ensure_no_text(el: &XmlElement) -> Result<(), SchemaViolation> {
    match el.texts().map(str::trim).find(|t| !t.is_empty()) {
        Some(text) => Err(SchemaViolation::UnexpectedText {
            element: el.name().to_string(),
            text: text.to_string(),
        }),
        None => Ok(()),
    }
}

/// Names an element for error messages, e.g. `operation[listEvents]`.
fn context(el: &XmlElement, name: &str) -> String {
    format!("{}[{}]", el.name(), name)
}

/// Holds the at-most-one `description` of a parent element.
struct DescriptionSlot {
    context: String,
    seen: bool,
    value: Option<String>,
}

impl DescriptionSlot {
    fn new(context: String) -> Self {
        Self {
            context,
            seen: false,
            value: None,
        }
    }

    fn set(&mut self, el: &XmlElement) -> Result<(), SchemaViolation> {
        if self.seen {
            return Err(SchemaViolation::DuplicateDescription {
                context: self.context.clone(),
            });
        }
        self.seen = true;
        self.value = parse_description(el, &self.context)?;
        Ok(())
    }

    fn into_inner(self) -> Option<String> {
        self.value
    }
}

/// Parses a `description` element.
fn parse_description(el: &XmlElement, context: &str) -> Result<Option<String>, SchemaViolation> {
    attributes(el, [], &[])?;

    if let Some(child) = el.elements().next() {
        return Err(SchemaViolation::DescriptionHasChildren {
            context: context.to_string(),
            element: child.name().to_string(),
        });
    }

    Ok(normalize_text(&el.text()))
}

/// Parses the children of an element that holds exactly one `description`.
fn sole_description(el: &XmlElement, context: &str) -> Result<Option<String>, SchemaViolation> {
    let mut description = DescriptionSlot::new(context.to_string());

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            other => return Err(SchemaViolation::unexpected_element(other, context)),
        }
    }

    if !description.seen {
        return Err(SchemaViolation::missing_element("description", context));
    }
    Ok(description.into_inner())
}

/// Parses an `operation` element.
fn parse_operation(el: &XmlElement) -> Result<Operation, SchemaViolation> {
    let [name, since] = attributes(el, ["name", "since"], &[])?;
    ensure_no_text(el)?;
    let ctx = context(el, name);

    let mut description = DescriptionSlot::new(ctx.clone());
    let mut parameters = None;

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "parameters" => {
                if parameters.is_some() {
                    return Err(SchemaViolation::duplicate_element("parameters", &ctx));
                }
                parameters = Some(parse_parameters(child, &ctx)?);
            }
            other => return Err(SchemaViolation::unexpected_element(other, &ctx)),
        }
    }

    let (params, response, exceptions) =
        parameters.ok_or_else(|| SchemaViolation::missing_element("parameters", &ctx))?;

    tracing::debug!(operation = name, params = params.len(), "parsed operation");

    Ok(Operation {
        name: name.to_string(),
        since: since.to_string(),
        description: description.into_inner(),
        params,
        response,
        exceptions,
    })
}

/// Parses the `parameters` block of an operation.
fn parse_parameters(
    el: &XmlElement,
    ctx: &str,
) -> Result<(Vec<Param>, SimpleResponse, Vec<ExceptionRef>), SchemaViolation> {
    attributes(el, [], &[])?;
    ensure_no_text(el)?;

    let mut request = None;
    let mut response = None;
    let mut exceptions = None;

    for child in el.elements() {
        match child.name() {
            "request" => {
                if request.is_some() {
                    return Err(SchemaViolation::duplicate_element("request", ctx));
                }
                request = Some(parse_request(child)?);
            }
            "simpleResponse" => {
                if response.is_some() {
                    return Err(SchemaViolation::duplicate_element("simpleResponse", ctx));
                }
                response = Some(parse_simple_response(child, ctx)?);
            }
            "exceptions" => {
                if exceptions.is_some() {
                    return Err(SchemaViolation::duplicate_element("exceptions", ctx));
                }
                exceptions = Some(parse_exceptions(child, ctx)?);
            }
            other => return Err(SchemaViolation::unexpected_element(other, ctx)),
        }
    }

    Ok((
        request.ok_or_else(|| SchemaViolation::missing_element("request", ctx))?,
        response.ok_or_else(|| SchemaViolation::missing_element("simpleResponse", ctx))?,
        exceptions.ok_or_else(|| SchemaViolation::missing_element("exceptions", ctx))?,
    ))
}

/// Parses a `request` element.
fn parse_request(el: &XmlElement) -> Result<Vec<Param>, SchemaViolation> {
    attributes(el, [], &[])?;
    ensure_no_text(el)?;

    el.elements()
        .map(|child| match child.name() {
            "parameter" => parse_parameter(child, ParentKind::Operation),
            other => Err(SchemaViolation::unexpected_element(other, "request")),
        })
        .collect()
}

/// Parses a `simpleResponse` element.
fn parse_simple_response(el: &XmlElement, ctx: &str) -> Result<SimpleResponse, SchemaViolation> {
    let [ty] = attributes(el, ["type"], &[])?;
    ensure_no_text(el)?;

    Ok(SimpleResponse {
        ty: TypeDescriptor::resolve(ty)?,
        description: sole_description(el, &format!("{ctx}/simpleResponse"))?,
    })
}

/// Parses an `exceptions` element.
fn parse_exceptions(el: &XmlElement, ctx: &str) -> Result<Vec<ExceptionRef>, SchemaViolation> {
    attributes(el, [], &[])?;
    ensure_no_text(el)?;

    el.elements()
        .map(|child| match child.name() {
            "exception" => parse_exception_ref(child, ctx),
            other => Err(SchemaViolation::unexpected_element(other, "exceptions")),
        })
        .collect()
}

/// Parses an `exception` reference: a type name and a description only.
fn parse_exception_ref(el: &XmlElement, ctx: &str) -> Result<ExceptionRef, SchemaViolation> {
    let [raw] = attributes(el, ["type"], &[])?;
    ensure_no_text(el)?;

    let type_name = match TypeDescriptor::resolve(raw)? {
        TypeDescriptor::Scalar(name) => name,
        _ => {
            return Err(SchemaViolation::malformed_type(
                raw,
                "exception reference must name a single type",
            ));
        }
    };

    Ok(ExceptionRef {
        description: sole_description(el, &format!("{ctx}/exception[{type_name}]"))?,
        type_name,
    })
}

/// Parses a `parameter` element.
fn parse_parameter(el: &XmlElement, parent: ParentKind) -> Result<Param, SchemaViolation> {
    let [name, raw_type] = attributes(el, ["name", "type"], &["mandatory"])?;
    ensure_no_text(el)?;
    let ctx = context(el, name);

    let mandatory = match el.attribute("mandatory") {
        None | Some("false") => false,
        Some("true") => true,
        Some(other) => return Err(SchemaViolation::invalid_attr(el.name(), "mandatory", other)),
    };
    let ty = TypeDescriptor::resolve(raw_type)?;

    let mut description = DescriptionSlot::new(ctx.clone());
    let mut values = None;

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "validValues" if parent == ParentKind::ExceptionType => {
                if values.is_some() {
                    return Err(SchemaViolation::duplicate_element("validValues", &ctx));
                }
                values = Some(parse_valid_values(child, parent, &ctx)?);
            }
            other => return Err(SchemaViolation::unexpected_element(other, &ctx)),
        }
    }

    Ok(Param {
        name: name.to_string(),
        ty,
        mandatory,
        description: description.into_inner(),
        values,
    })
}

/// Parses a `validValues` element.
fn parse_valid_values(
    el: &XmlElement,
    parent: ParentKind,
    ctx: &str,
) -> Result<Vec<EnumValue>, SchemaViolation> {
    attributes(el, [], &[])?;
    ensure_no_text(el)?;

    let values = el
        .elements()
        .map(|child| match child.name() {
            "value" => parse_value(child, parent),
            other => Err(SchemaViolation::unexpected_element(other, ctx)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(SchemaViolation::missing_element("value", ctx));
    }
    Ok(values)
}

/// Parses a `value` element.
///
/// Values of exception parameters carry a positive numeric `id`; values of
/// simple types carry none.
fn parse_value(el: &XmlElement, parent: ParentKind) -> Result<EnumValue, SchemaViolation> {
    let (name, id) = match parent {
        ParentKind::ExceptionType => {
            let [name, raw_id] = attributes(el, ["name", "id"], &[])?;
            (name, Some(parse_value_id(el, raw_id)?))
        }
        ParentKind::SimpleType => {
            let [name] = attributes(el, ["name"], &[])?;
            (name, None)
        }
        ParentKind::Operation | ParentKind::DataType => {
            return Err(SchemaViolation::unexpected_element(el.name(), format!("{parent:?}")));
        }
    };
    ensure_no_text(el)?;

    Ok(EnumValue {
        name: name.to_string(),
        id,
        description: sole_description(el, &context(el, name))?,
    })
}

/// Parses a wire discriminant: ASCII digits only, greater than zero.
fn parse_value_id(el: &XmlElement, raw: &str) -> Result<u32, SchemaViolation> {
    let invalid = || SchemaViolation::invalid_attr(el.name(), "id", raw);

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

/// Parses a `dataType` element.
fn parse_data_type(el: &XmlElement) -> Result<DataType, SchemaViolation> {
    let [name] = attributes(el, ["name"], &[])?;
    ensure_no_text(el)?;
    let ctx = context(el, name);

    let mut description = DescriptionSlot::new(ctx.clone());
    let mut params = Vec::new();

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "parameter" => params.push(parse_parameter(child, ParentKind::DataType)?),
            other => return Err(SchemaViolation::unexpected_element(other, &ctx)),
        }
    }

    tracing::debug!(data_type = name, fields = params.len(), "parsed data type");

    Ok(DataType {
        name: name.to_string(),
        description: description.into_inner(),
        params,
    })
}

/// Parses an `exceptionType` element.
fn parse_exception_type(el: &XmlElement) -> Result<ExceptionType, SchemaViolation> {
    let [name, prefix] = attributes(el, ["name", "prefix"], &[])?;
    ensure_no_text(el)?;
    let ctx = context(el, name);

    let mut description = DescriptionSlot::new(ctx.clone());
    let mut params = Vec::new();

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "parameter" => params.push(parse_parameter(child, ParentKind::ExceptionType)?),
            other => return Err(SchemaViolation::unexpected_element(other, &ctx)),
        }
    }

    tracing::debug!(exception_type = name, prefix, "parsed exception type");

    Ok(ExceptionType {
        name: name.to_string(),
        prefix: prefix.to_string(),
        description: description.into_inner(),
        params,
    })
}

/// Parses a `simpleType` element.
fn parse_simple_type(el: &XmlElement) -> Result<SimpleType, SchemaViolation> {
    let [name, raw_type] = attributes(el, ["name", "type"], &[])?;
    ensure_no_text(el)?;
    let ctx = context(el, name);
    let ty = TypeDescriptor::resolve(raw_type)?;

    let mut description = DescriptionSlot::new(ctx.clone());
    let mut values = None;

    for child in el.elements() {
        match child.name() {
            "description" => description.set(child)?,
            "validValues" => {
                if values.is_some() {
                    return Err(SchemaViolation::duplicate_element("validValues", &ctx));
                }
                values = Some(parse_valid_values(child, ParentKind::SimpleType, &ctx)?);
            }
            other => return Err(SchemaViolation::unexpected_element(other, &ctx)),
        }
    }

    if values.is_some() && !ty.is_string() {
        return Err(SchemaViolation::NonStringEnumeration {
            name: name.to_string(),
            type_name: ty.to_string(),
        });
    }

    Ok(SimpleType {
        name: name.to_string(),
        ty,
        description: description.into_inner(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPORTS_API: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<interface name="SportsAPING" owner="BDP" version="1.0.0" date="now()">
    <description>
        Sports betting
        operations
    </description>

    <operation name="listEventTypes" since="1.0.0">
        <description>Returns a list of Event Types</description>
        <parameters>
            <request>
                <parameter mandatory="true" name="filter" type="MarketFilter">
                    <description>The filter to select desired markets.</description>
                </parameter>
                <parameter name="locale" type="string">
                    <description>The language used for the response.</description>
                </parameter>
            </request>
            <simpleResponse type="list(EventTypeResult)">
                <description>output data</description>
            </simpleResponse>
            <exceptions>
                <exception type="APINGException">
                    <description>Generic exception</description>
                </exception>
            </exceptions>
        </parameters>
    </operation>

    <operation name="getVersion" since="1.2.0">
        <parameters>
            <request/>
            <simpleResponse type="string">
                <description/>
            </simpleResponse>
            <exceptions/>
        </parameters>
    </operation>

    <exceptionType name="APINGException" prefix="ANGX">
        <description>This exception is thrown when an operation fails</description>
        <parameter name="errorCode" type="string">
            <description>the unique code for this error</description>
            <validValues>
                <value id="1" name="TOO_MUCH_DATA">
                    <description>The operation requested too much data</description>
                </value>
                <value id="2" name="INVALID_INPUT_DATA">
                    <description>Invalid input data</description>
                </value>
            </validValues>
        </parameter>
        <parameter name="errorDetails" type="string">
            <description>the stack trace of the error</description>
        </parameter>
    </exceptionType>

    <dataType name="MarketFilter">
        <parameter name="textQuery" type="string">
            <description>Restrict markets by any text</description>
        </parameter>
        <parameter name="eventTypeIds" type="set(EventTypeId)">
            <description>Restrict markets by event type</description>
        </parameter>
    </dataType>

    <simpleType name="EventTypeId" type="string"/>
    <simpleType name="MarketProjection" type="string">
        <validValues>
            <value name="COMPETITION">
                <description>If not selected then the competition will not be returned</description>
            </value>
            <value name="EVENT">
                <description>If not selected then the event will not be returned</description>
            </value>
        </validValues>
    </simpleType>
</interface>"#;

    fn minimal(body: &str) -> String {
        format!("<interface name=\"Test\">{body}</interface>")
    }

    #[test]
    fn test_parse_document() {
        let api = parse_document(SPORTS_API).expect("Failed to parse");

        assert_eq!(api.name.as_deref(), Some("SportsAPING"));
        assert_eq!(api.version.as_deref(), Some("1.0.0"));
        assert_eq!(api.description.as_deref(), Some("Sports betting operations"));
        assert_eq!(api.operations.len(), 2);
        assert_eq!(api.exception_types.len(), 1);
        assert_eq!(api.data_types.len(), 1);
        assert_eq!(api.simple_types.len(), 2);
    }

    #[test]
    fn test_parse_operation() {
        let api = parse_document(SPORTS_API).expect("Failed to parse");
        let op = &api.operations[0];

        assert_eq!(op.name, "listEventTypes");
        assert_eq!(op.since, "1.0.0");
        assert_eq!(op.description.as_deref(), Some("Returns a list of Event Types"));
        assert_eq!(op.params.len(), 2);
        assert!(op.params[0].mandatory);
        assert!(!op.params[1].mandatory);
        assert_eq!(
            op.response.ty,
            TypeDescriptor::List(Box::new(TypeDescriptor::scalar("EventTypeResult")))
        );
        assert_eq!(op.exceptions.len(), 1);
        assert_eq!(op.exceptions[0].type_name, "APINGException");
    }

    #[test]
    fn test_parse_operation_without_parameters() {
        let api = parse_document(SPORTS_API).expect("Failed to parse");
        let op = api.operation("getVersion").expect("missing operation");

        assert!(op.params.is_empty());
        assert!(op.exceptions.is_empty());
        assert_eq!(op.response.description, None);
        assert_eq!(op.description, None);
    }

    #[test]
    fn test_parse_exception_type() {
        let api = parse_document(SPORTS_API).expect("Failed to parse");
        let exception = &api.exception_types[0];

        assert_eq!(exception.prefix, "ANGX");
        let values = exception
            .error_code()
            .and_then(|p| p.values.as_ref())
            .expect("missing values");
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name, "TOO_MUCH_DATA");
        assert_eq!(values[0].id, Some(1));
        assert_eq!(values[1].id, Some(2));
    }

    #[test]
    fn test_parse_simple_types() {
        let api = parse_document(SPORTS_API).expect("Failed to parse");

        let alias = api.simple_type("EventTypeId").expect("missing alias");
        assert!(!alias.is_enum());

        let projection = api.simple_type("MarketProjection").expect("missing enum");
        let names: Vec<_> = projection
            .values
            .iter()
            .flatten()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, ["COMPETITION", "EVENT"]);
        assert!(projection.values.iter().flatten().all(|v| v.id.is_none()));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  one\n    two  \n three "), Some("one two three".into()));
        assert_eq!(normalize_text("single line"), Some("single line".into()));
        assert_eq!(normalize_text(" \n\t \n "), None);
        assert_eq!(normalize_text(""), None);

        let once = normalize_text("a\r\n  b\n\n c").unwrap();
        assert_eq!(normalize_text(&once), Some(once.clone()));
    }

    #[test]
    fn test_normalize_text_carriage_returns() {
        assert_eq!(normalize_text("a\rb"), Some("a b".into()));
        assert_eq!(normalize_text("a\r\r\nb\r"), Some("a b".into()));
    }

    #[test]
    fn test_description_char_ref_carriage_return() {
        let xml = minimal(r#"<dataType name="A"><description>one&#13;two</description></dataType>"#);
        let api = parse_document(&xml).expect("Failed to parse");
        assert_eq!(api.data_types[0].description.as_deref(), Some("one two"));
    }

    #[test]
    fn test_operation_missing_since() {
        let xml = minimal(
            r#"<operation name="x"><parameters><request/><simpleResponse type="string"><description/></simpleResponse><exceptions/></parameters></operation>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::MissingAttribute { ref attribute, .. }) if attribute == "since"
        ));
    }

    #[test]
    fn test_unexpected_attributes_listed() {
        let xml = minimal(r#"<dataType name="A" color="red" size="1"/>"#);
        match parse_document(&xml) {
            Err(SchemaViolation::UnexpectedAttributes { element, attributes }) => {
                assert_eq!(element, "dataType");
                assert_eq!(attributes, ["color", "size"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_element() {
        let xml = minimal(r#"<dataType name="A"><field name="b"/></dataType>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedElement { ref element, .. }) if element == "field"
        ));

        let xml = minimal(r#"<unknown/>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedElement { .. })
        ));
    }

    #[test]
    fn test_duplicate_description() {
        let xml = minimal(
            r#"<dataType name="A"><description>one</description><description/></dataType>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::DuplicateDescription { .. })
        ));
    }

    #[test]
    fn test_description_with_children() {
        let xml = minimal(r#"<description>text <b>bold</b></description>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::DescriptionHasChildren { .. })
        ));
    }

    #[test]
    fn test_unexpected_text() {
        let xml = minimal(r#"<dataType name="A">stray</dataType>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedText { ref text, .. }) if text == "stray"
        ));
    }

    #[test]
    fn test_invalid_mandatory() {
        let xml = minimal(r#"<dataType name="A"><parameter name="b" type="string" mandatory="yes"/></dataType>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::InvalidAttribute { ref attribute, .. }) if attribute == "mandatory"
        ));
    }

    #[test]
    fn test_valid_values_rejected_on_data_type() {
        let xml = minimal(
            r#"<dataType name="A"><parameter name="b" type="string"><validValues><value name="X"><description/></value></validValues></parameter></dataType>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedElement { ref element, .. }) if element == "validValues"
        ));
    }

    #[test]
    fn test_exception_value_requires_positive_id() {
        for id in ["0", "-1", "abc", "1.5"] {
            let xml = minimal(&format!(
                r#"<exceptionType name="E" prefix="E"><parameter name="errorCode" type="string"><validValues><value id="{id}" name="X"><description/></value></validValues></parameter></exceptionType>"#
            ));
            assert!(
                matches!(parse_document(&xml), Err(SchemaViolation::InvalidAttribute { .. })),
                "id {id} should be rejected"
            );
        }

        let xml = minimal(
            r#"<exceptionType name="E" prefix="E"><parameter name="errorCode" type="string"><validValues><value name="X"><description/></value></validValues></parameter></exceptionType>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_simple_type_value_rejects_id() {
        let xml = minimal(
            r#"<simpleType name="S" type="string"><validValues><value id="1" name="X"><description/></value></validValues></simpleType>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedAttributes { .. })
        ));
    }

    #[test]
    fn test_non_string_enumeration() {
        let xml = minimal(
            r#"<simpleType name="S" type="i32"><validValues><value name="X"><description/></value></validValues></simpleType>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::NonStringEnumeration { .. })
        ));
    }

    #[test]
    fn test_parameters_require_each_block() {
        let xml = minimal(
            r#"<operation name="x" since="1"><parameters><request/><exceptions/></parameters></operation>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::MissingElement { ref element, .. }) if element == "simpleResponse"
        ));

        let xml = minimal(
            r#"<operation name="x" since="1"><parameters><request/><request/><simpleResponse type="string"><description/></simpleResponse><exceptions/></parameters></operation>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::DuplicateElement { ref element, .. }) if element == "request"
        ));
    }

    #[test]
    fn test_exception_ref_has_no_parameters() {
        let xml = minimal(
            r#"<operation name="x" since="1"><parameters><request/><simpleResponse type="string"><description/></simpleResponse><exceptions><exception type="E"><description/><parameter name="a" type="string"/></exception></exceptions></parameters></operation>"#,
        );
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::UnexpectedElement { ref element, .. }) if element == "parameter"
        ));
    }

    #[test]
    fn test_malformed_parameter_type() {
        let xml = minimal(r#"<dataType name="A"><parameter name="b" type="list(a_b)"/></dataType>"#);
        assert!(matches!(
            parse_document(&xml),
            Err(SchemaViolation::MalformedType { .. })
        ));
    }

    #[test]
    fn test_parse_from_built_tree() {
        let root = XmlElement::new("interface").with_child(
            XmlElement::new("simpleType")
                .with_attribute("name", "Price")
                .with_attribute("type", "double")
                .with_text("\n    "),
        );
        let api = parse(&root).expect("Failed to parse");
        assert_eq!(api.simple_types[0].ty, TypeDescriptor::scalar("double"));
        assert_eq!(api.name, None);
    }
}
