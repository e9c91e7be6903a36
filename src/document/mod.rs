//! In-memory XML tree for the SQX config document
//!
//! The merger needs to move whole `Item` subtrees between documents, so the
//! markup is materialized as a small element tree on top of `quick-xml` events.
//! Whitespace-only text is dropped on read and the writer re-indents, which
//! makes read-then-write stable after the first normalization. Text with
//! content keeps its surrounding whitespace.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;


/// Errors while reading or writing markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("malformed markup: {0}")]
    Syntax(String),

    #[error("no root element")]
    NoRoot,

    #[error("more than one root element")]
    MultipleRoots,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("unexpected closing tag")]
    UnexpectedEnd,

    #[error("failed to serialize document: {0}")]
    Write(String),
}

/// A node inside an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

/// An element with its attributes in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements named `name`
    pub fn child_elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }
}

fn syntax(err: impl ToString) -> DocumentError {
    DocumentError::Syntax(err.to_string())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, DocumentError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(syntax)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(syntax)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_some() => return Err(DocumentError::MultipleRoots),
        None => *root = Some(element),
    }
    Ok(())
}

fn push_node(stack: &mut [Element], node: Node) {
    // Content outside the root element carries nothing the installer needs.
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Parse a document and return its root element
pub fn parse(xml: &str) -> Result<Element, DocumentError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(element_from_start(&start)?),
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or(DocumentError::UnexpectedEnd)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(syntax)?;
                // Indentation between elements; any other text is kept verbatim.
                if !text.trim().is_empty() {
                    push_node(&mut stack, Node::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(data)) => {
                push_node(
                    &mut stack,
                    Node::CData(String::from_utf8_lossy(&data).into_owned()),
                );
            }
            Ok(Event::Comment(comment)) => {
                push_node(
                    &mut stack,
                    Node::Comment(String::from_utf8_lossy(&comment).into_owned()),
                );
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(syntax(err)),
        }
    }

    if let Some(open) = stack.last() {
        return Err(DocumentError::Unclosed(open.name.clone()));
    }
    root.ok_or(DocumentError::NoRoot)
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
            Node::CData(data) => emit(writer, Event::CData(BytesCData::new(data.as_str())))?,
            Node::Comment(comment) => emit(
                writer,
                Event::Comment(BytesText::from_escaped(comment.as_str())),
            )?,
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

/// Serialize `root` as a UTF-8 document with an XML declaration
pub fn to_xml(root: &Element) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root)?;

    let mut xml =
        String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Write(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}
