// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Element tree parsing
//!
//! Reports are read whole and turned into a small in-memory tree of [`Element`]
//! nodes using `quick-xml` pull events. Only element names, attributes and
//! nesting are kept; character data is checked for well-formedness and then
//! dropped, since no extractor reads it.
//!
//! Files are read as bytes and transcoded to UTF-8 first. The encoding comes
//! from a byte-order mark, then from the `encoding` of the XML declaration,
//! and defaults to UTF-8.
//!
//! # Example
//!
//! ```
//! use junit_csv_report::parser::parse_document;
//!
//! let root = parse_document(r#"<testsuite name="s"><testcase name="t"/></testsuite>"#).unwrap();
//! assert_eq!(root.tag(), "testsuite");
//! assert_eq!(root.attr("name"), Some("s"));
//! assert_eq!(root.children().len(), 1);
//! ```

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::ReportError;

const BOM: char = '\u{feff}';

/// An XML element with its attributes and child elements, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Qualified tag name as written in the document
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by qualified name
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value, or the empty string when absent
    #[must_use]
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or_default()
    }

    /// Direct child elements in document order
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Direct children with the given tag, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }
}

/// Decode and parse a complete XML document held as raw bytes
///
/// # Errors
///
/// Returns `ReportError::Malformed` if the declared encoding is unknown or the
/// bytes are not valid in the detected encoding, and otherwise the errors of
/// [`parse_document`].
pub fn parse_document_bytes(bytes: &[u8]) -> Result<Element, ReportError> {
    let xml = decode_document(bytes)?;
    parse_document(&xml)
}

/// Transcode a document to UTF-8 according to its BOM or XML declaration
///
/// # Errors
///
/// Returns `ReportError::Malformed` for an unknown encoding label or bytes
/// that are invalid in the chosen encoding.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, ReportError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (sniff_encoding(bytes)?, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            let position = match std::str::from_utf8(body) {
                Err(e) if encoding == UTF_8 => e.valid_up_to(),
                _ => 0,
            };
            ReportError::malformed(
                position,
                format!("report is not valid {}", encoding.name()),
            )
        })
}

/// Pick an encoding for a document without a byte-order mark
fn sniff_encoding(bytes: &[u8]) -> Result<&'static Encoding, ReportError> {
    match bytes {
        [0x3C, 0x00, 0x3F, 0x00, ..] => return Ok(UTF_16LE),
        [0x00, 0x3C, 0x00, 0x3F, ..] => return Ok(UTF_16BE),
        _ => {}
    }

    let Some(label) = declared_encoding(bytes) else {
        return Ok(UTF_8);
    };
    Encoding::for_label(label).ok_or_else(|| {
        ReportError::malformed(
            0,
            format!("unsupported encoding '{}'", String::from_utf8_lossy(label)),
        )
    })
}

/// The `encoding` pseudo-attribute of a leading `<?xml ... ?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let decl = bytes.strip_prefix(b"<?xml")?;
    let decl = &decl[..decl.windows(2).position(|w| w == b"?>")?];

    let start = decl.windows(8).position(|w| w == b"encoding")? + 8;
    let rest = decl[start..].trim_ascii_start().strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let end = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..end])
}

/// Parse a complete XML document into its root element
///
/// # Errors
///
/// Returns `ReportError::Xml` for syntax errors detected by the reader, and
/// `ReportError::Malformed` when the events do not form exactly one balanced
/// root element (unclosed tags, content after the root, no root at all).
pub fn parse_document(xml: &str) -> Result<Element, ReportError> {
    let xml = xml.strip_prefix(BOM).unwrap_or(xml);
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut at_start = true;

    loop {
        let event = reader.read_event().map_err(|source| ReportError::Xml {
            position: reader.buffer_position(),
            source,
        })?;
        let position = reader.buffer_position();

        match event {
            Event::Decl(_) if !at_start => {
                return Err(ReportError::malformed(
                    position,
                    "XML declaration not at start of document",
                ));
            }
            Event::Start(start) => {
                if root.is_some() {
                    return Err(ReportError::malformed(
                        position,
                        "junk after document element",
                    ));
                }
                stack.push(element_from_start(&reader, &start, position)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&reader, &start, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    ReportError::malformed(position, "end tag without matching start tag")
                })?;
                if element.tag.as_bytes() != end.name().as_ref() {
                    return Err(ReportError::malformed(
                        position,
                        format!("mismatched end tag for <{}>", element.tag),
                    ));
                }
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|source| ReportError::Xml {
                    position,
                    source,
                })?;
                if stack.is_empty() && !text.trim().is_empty() {
                    return Err(ReportError::malformed(
                        position,
                        "text outside of document element",
                    ));
                }
            }
            Event::CData(_) if stack.is_empty() => {
                return Err(ReportError::malformed(
                    position,
                    "CDATA outside of document element",
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        at_start = false;
    }

    let position = reader.buffer_position();
    if let Some(open) = stack.last() {
        return Err(ReportError::malformed(
            position,
            format!("unclosed element <{}>", open.tag),
        ));
    }
    root.ok_or_else(|| ReportError::malformed(position, "no element found"))
}

fn element_from_start(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
    position: usize,
) -> Result<Element, ReportError> {
    let xml_error = |source: quick_xml::Error| ReportError::Xml { position, source };
    let decoder = reader.decoder();

    let tag = decoder
        .decode(start.name().as_ref())
        .map_err(xml_error)?
        .into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(e.into()))?;
        let key = decoder.decode(attr.key.as_ref()).map_err(xml_error)?;
        let raw = decoder.decode(&attr.value).map_err(xml_error)?;
        if raw.contains('<') {
            return Err(ReportError::malformed(
                position,
                format!("'<' in value of attribute '{key}'"),
            ));
        }
        let value = unescape(&normalize_attr_whitespace(&raw))
            .map_err(|e| xml_error(e.into()))?
            .into_owned();
        attributes.push((key.into_owned(), value));
    }

    Ok(Element {
        tag,
        attributes,
        children: Vec::new(),
    })
}

/// Replace literal line breaks and tabs in an attribute value with spaces
///
/// A CRLF pair counts as one line break. Characters written as references
/// (`&#10;`) are untouched because this runs before unescaping.
fn normalize_attr_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\r', '\n']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\r', '\n'], " "))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: usize,
) -> Result<(), ReportError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(ReportError::malformed(
            position,
            "junk after document element",
        ));
    } else {
        *root = Some(element);
    }
    Ok(())
}
