//! Owned XML element tree built from `quick_xml` events.
//!
//! JATS cell content is mixed content: text, then an element, then the
//! element's tail text, and so on. The extractor needs parent/child access
//! and "first descendant named X" lookups, which a streaming reader does not
//! give us, so the document is materialized once into [`Element`] nodes.
//! Text is kept verbatim (no trimming) so tail text survives.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::slice;

use crate::error::{JatsdocError, Result};

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its local name, attributes, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Local name, namespace prefix dropped (`mml:math` → `math`).
    pub name: String,
    /// Attributes in document order, keys as written, values unescaped.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All descendant elements in depth-first pre-order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// First descendant element with the given local name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|e| e.name == name)
    }

    /// Every descendant element with the given local name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |e| e.name == name)
    }

    /// Concatenation of every descendant text node, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.push_text(out),
            }
        }
    }
}

/// Pre-order iterator over descendant elements. See [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(Node::Element(e)) => {
                    self.stack.push(e.children.iter());
                    return Some(e);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Parse an XML document into its root [`Element`].
///
/// Comments, processing instructions, and the doctype are dropped. Text with
/// entities that cannot be resolved (e.g. HTML named entities without a DTD)
/// is kept in its raw escaped form rather than failing the whole document.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            JatsdocError::Xml(format!("{e} at byte {}", reader.error_position()))
        })?;
        match event {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(junk_after_root(&reader));
                }
                stack.push(element_from_start(e)?);
            }
            Event::Empty(ref e) => {
                if root.is_some() {
                    return Err(junk_after_root(&reader));
                }
                let elem = element_from_start(e)?;
                close(elem, &mut stack, &mut root);
            }
            Event::End(_) => match stack.pop() {
                Some(elem) => close(elem, &mut stack, &mut root),
                None => {
                    return Err(JatsdocError::Xml(format!(
                        "unexpected end tag at byte {}",
                        reader.buffer_position()
                    )))
                }
            },
            Event::Text(ref t) => {
                if let Some(parent) = stack.last_mut() {
                    let text = match t.unescape() {
                        Ok(s) => s.into_owned(),
                        Err(e) => {
                            log::warn!("keeping raw text after unescape failure: {e}");
                            String::from_utf8_lossy(t).into_owned()
                        }
                    };
                    push_text(parent, text);
                }
            }
            Event::CData(ref c) => {
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, String::from_utf8_lossy(c).into_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(JatsdocError::Xml(format!(
            "unclosed element <{}> at end of input",
            open.name
        )));
    }
    root.ok_or_else(|| JatsdocError::Xml("no root element".into()))
}

/// Attach a finished element to its parent, or make it the root.
fn close(elem: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(elem)),
        None => *root = Some(elem),
    }
}

/// Append text, merging with a preceding text node (entity and CDATA
/// boundaries otherwise split one logical run into several nodes).
fn push_text(parent: &mut Element, text: String) {
    if let Some(Node::Text(prev)) = parent.children.last_mut() {
        prev.push_str(&text);
    } else {
        parent.children.push(Node::Text(text));
    }
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| JatsdocError::Xml(format!("<{name}>: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        attrs.push((key, value));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

fn junk_after_root(reader: &Reader<&[u8]>) -> JatsdocError {
    JatsdocError::Xml(format!(
        "junk after document element at byte {}",
        reader.buffer_position()
    ))
}
