//! Plain-text extraction from DOCX (Office Open XML) documents.
//!
//! Only top-level body paragraphs are read: paragraphs nested in tables,
//! text boxes or content controls are skipped, and each body paragraph
//! yields exactly one entry, empty or not.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use zip::ZipArchive;

use crate::error::ResumeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Return the text of every body paragraph of a DOCX file, in document order.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, ResumeError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ResumeError::Docx(e.to_string()))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ResumeError::Docx(format!("{DOCUMENT_PART}: {e}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// WordprocessingML namespaces: transitional and strict.
const WORD_NAMESPACES: [&[u8]; 2] = [
    b"http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    b"http://purl.oclc.org/ooxml/wordprocessingml/main",
];

/// Local name of a WordprocessingML element, `None` for any other namespace.
type Tag = Option<Vec<u8>>;

/// Walk `word/document.xml` and collect paragraph text.
///
/// Elements are matched by namespace and local name, whatever prefix the
/// document binds WordprocessingML to.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, ResumeError> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Tag> = Vec::new();
    let mut paragraphs = Vec::new();
    // Stack depth of the open body paragraph, plus its text so far.
    let mut current: Option<(usize, String)> = None;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| ResumeError::Docx(format!("malformed {DOCUMENT_PART}: {e}")))?;

        match event {
            Event::Start(e) => {
                let tag = word_tag(&ns, e.local_name().as_ref());
                if is(&tag, b"p") && is_body(&stack) {
                    current = Some((stack.len(), String::new()));
                }
                stack.push(tag);
            }
            Event::Empty(e) => {
                let tag = word_tag(&ns, e.local_name().as_ref());
                if is(&tag, b"p") && is_body(&stack) {
                    paragraphs.push(String::new());
                    continue;
                }
                if let Some((depth, text)) = current.as_mut() {
                    if owns_innermost(&stack, *depth) {
                        match tag.as_deref() {
                            Some(b"tab") => text.push('\t'),
                            Some(b"br") | Some(b"cr") => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some((depth, text)) = current.as_mut() {
                    let in_run_text = stack.last().is_some_and(|tag| is(tag, b"t"));
                    if in_run_text && owns_innermost(&stack, *depth) {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| ResumeError::Docx(format!("bad text entity: {e}")))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Event::End(_) => {
                stack.pop();
                if current
                    .as_ref()
                    .is_some_and(|(depth, _)| stack.len() == *depth)
                {
                    if let Some((_, text)) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn word_tag(ns: &ResolveResult<'_>, local_name: &[u8]) -> Tag {
    match ns {
        ResolveResult::Bound(Namespace(uri))
            if WORD_NAMESPACES.iter().any(|known| *known == *uri) =>
        {
            Some(local_name.to_vec())
        }
        _ => None,
    }
}

fn is(tag: &Tag, local_name: &[u8]) -> bool {
    tag.as_deref() == Some(local_name)
}

fn is_body(stack: &[Tag]) -> bool {
    stack.last().is_some_and(|tag| is(tag, b"body"))
}

/// True when no other paragraph is open between the body paragraph at `depth`
/// and the current position.
fn owns_innermost(stack: &[Tag], depth: usize) -> bool {
    !stack.iter().skip(depth + 1).any(|tag| is(tag, b"p"))
}
