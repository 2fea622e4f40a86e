//! Minimal element tree built with quick-xml.
//!
//! Only what the table parser needs is kept: element names, the text that
//! precedes an element's first child, and child elements. Attributes,
//! comments and processing instructions are dropped.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::parser::ParseError;

#[derive(Debug, Default)]
pub(crate) struct Element {
    pub name: String,
    /// Character data before the first child element (entities resolved).
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first direct child with the given name, or "" if there is none.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map(|c| c.text.as_str()).unwrap_or("")
    }

    /// All descendants (excluding `self`) with the given name, in pre-order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }
}

/// Parses a whole XML document and returns its root element.
pub(crate) fn parse_document(xml: &str) -> Result<Element, ParseError> {
    let xml = normalize_line_endings(xml);
    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(false);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Xml {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                check_attributes(&e, reader.buffer_position() as u64)?;
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if open.is_empty() && root.is_some() {
                    return Err(ParseError::Malformed(format!(
                        "second root element <{}>",
                        name
                    )));
                }
                open.push(Element::new(name));
            }
            Event::Empty(e) => {
                check_attributes(&e, reader.buffer_position() as u64)?;
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                attach(Element::new(name), &mut open, &mut root)?;
            }
            Event::End(e) => {
                let element = open.pop().ok_or_else(|| {
                    ParseError::Malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(element, &mut open, &mut root)?;
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| ParseError::Xml {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                append_text(&text, &mut open)?;
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&text, &mut open)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ParseError::Malformed(format!(
            "unclosed element <{}>",
            unclosed.name
        )));
    }

    root.ok_or(ParseError::MissingRoot)
}

/// XML 1.0 section 2.11: `\r\n` and lone `\r` become `\n` before parsing,
/// so character references like `&#13;` still produce a carriage return.
fn normalize_line_endings(xml: &str) -> Cow<'_, str> {
    if xml.contains('\r') {
        Cow::Owned(xml.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(xml)
    }
}

/// Attributes are dropped, but they still have to be well-formed: quoted,
/// unique, and with valid references.
fn check_attributes(start: &BytesStart, position: u64) -> Result<(), ParseError> {
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ParseError::Xml {
            position,
            message: e.to_string(),
        })?;
        attribute.unescape_value().map_err(|e| ParseError::Xml {
            position,
            message: e.to_string(),
        })?;
    }
    Ok(())
}

fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(ParseError::Malformed(format!(
                "second root element <{}>",
                element.name
            )));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn append_text(text: &str, open: &mut [Element]) -> Result<(), ParseError> {
    match open.last_mut() {
        Some(current) => {
            if current.children.is_empty() {
                current.text.push_str(text);
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::Malformed(
            "character data outside root element".to_string(),
        )),
    }
}
