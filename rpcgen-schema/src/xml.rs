//! Minimal XML element tree.
//!
//! The schema parser validates structure node by node, so the document is
//! first read into an owned tree with quick-xml. Adjacent text, CDATA and
//! entity references are merged into a single text node; comments,
//! processing instructions and declarations are dropped.

use crate::error::SchemaViolation;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node below an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Nested element.
    Element(XmlElement),
    /// Character data, unescaped, untrimmed.
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Adds a text node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    /// Returns the qualified element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over attributes as `(key, value)` pairs.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all child nodes.
    #[must_use]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates over child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Iterates over text children.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Text(t) => Some(t.as_str()),
            XmlNode::Element(_) => None,
        })
    }

    /// Returns the concatenated text content of direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        self.texts().collect()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

/// Reads an XML document into its root element.
///
/// # Errors
/// Returns `SchemaViolation` if the XML is malformed, has no root element,
/// more than one root element, or text outside the root element.
pub fn parse_xml(xml: &str) -> Result<XmlElement, SchemaViolation> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(start_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                attach(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| SchemaViolation::InvalidStructure {
                    message: "unbalanced end tag".to_string(),
                })?;
                attach(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t)?;
                push_text(text, &mut stack)?;
            }
            Ok(Event::CData(ref c)) => {
                let text = std::str::from_utf8(c)?;
                push_text(text, &mut stack)?;
            }
            Ok(Event::GeneralRef(ref r)) => {
                let name = std::str::from_utf8(r)?;
                let reference = format!("&{name};");
                let text = quick_xml::escape::unescape(&reference)?;
                push_text(&text, &mut stack)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SchemaViolation::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(SchemaViolation::InvalidStructure {
            message: format!("element '{}' is not closed", open.name),
        });
    }

    root.ok_or_else(|| SchemaViolation::InvalidStructure {
        message: "no root element found".to_string(),
    })
}

/// Builds an element from a start tag, unescaping attribute values.
fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, SchemaViolation> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut element = XmlElement::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?;
        element.attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(element)
}

/// Attaches a completed element to its parent, or makes it the root.
fn attach(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), SchemaViolation> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(SchemaViolation::InvalidStructure {
            message: format!("second root element '{}'", element.name),
        }),
    }
}

/// Appends text to the open element; only whitespace may sit outside the root.
fn push_text(text: &str, stack: &mut [XmlElement]) -> Result<(), SchemaViolation> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(SchemaViolation::InvalidStructure {
            message: format!("text '{}' outside root element", text.trim()),
        }),
    }
}
