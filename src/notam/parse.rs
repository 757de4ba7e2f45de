use quick_xml::events::*;
use quick_xml::Reader;
use std::io::BufRead;
use tracing::debug;

use super::*;
use crate::error::{Error, Result};

fn is_notice(tag: &[u8]) -> bool {
    tag == b"NOTAM" || tag == b"Notam"
}

fn eof() -> Error {
    quick_xml::Error::UnexpectedEof("EOF".to_owned()).into()
}

/// Reads the text of the element just opened, up to its matching end tag.
fn read_field<B: BufRead>(reader: &mut Reader<B>, buf: &mut Vec<u8>) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event(buf)? {
            Event::Text(ref event) => text += &event.unescape_and_decode(reader)?,
            Event::CData(ref event) => text += &reader.decode(event.escaped()),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(eof()),
            _ => (),
        }
        buf.clear();
    }

    Ok(text)
}

fn get_notice<B: BufRead>(reader: &mut Reader<B>, buf: &mut Vec<u8>) -> Result<RawNotice> {
    let mut notice = RawNotice::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event(buf)? {
            Event::Start(ref event) => {
                match Field::from_tag(event.name()).filter(|f| depth == 0 || f.found_at_any_depth()) {
                    Some(field) => {
                        let text = read_field(reader, &mut Vec::new())?;
                        notice.insert(field, text);
                    }
                    None => depth += 1,
                }
            }
            Event::Empty(ref event) => {
                if let Some(field) = Field::from_tag(event.name()).filter(|f| depth == 0 || f.found_at_any_depth()) {
                    notice.insert(field, String::new());
                }
            }
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(eof()),
            _ => (),
        }
        buf.clear();
    }

    Ok(notice)
}

fn malformed<S: Into<String>>(reason: S) -> Error {
    Error::Malformed {
        reason: reason.into(),
    }
}

/// Collects every notice element in the document, wherever it is nested.
///
/// Fails on anything that isn't well-formed markup: elements left open at the
/// end of input, no root element, or text and elements outside the root.
pub fn get_notices<B: BufRead>(reader: &mut Reader<B>) -> Result<Vec<RawNotice>> {
    let mut buf = Vec::new();
    let mut notices = Vec::new();
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        match reader.read_event(&mut buf)? {
            Event::Start(_) | Event::Empty(_) if root_closed => {
                return Err(malformed("element after the root element"));
            }
            Event::Start(ref event) if is_notice(event.name()) => {
                notices.push(get_notice(reader, &mut Vec::new())?);
                root_closed = depth == 0;
            }
            Event::Start(_) => depth += 1,
            Event::Empty(_) => root_closed = depth == 0,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
            }
            Event::Text(ref event) if depth == 0 => {
                if !event.escaped().iter().all(u8::is_ascii_whitespace) {
                    return Err(malformed("text outside the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed("CDATA outside the root element"));
            }
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(malformed(format!(
            "{} element(s) left open at end of input",
            depth
        )));
    }
    if !root_closed {
        return Err(malformed("no root element"));
    }

    debug!(count = notices.len(), "read notices");
    Ok(notices)
}

/// Field text is kept exactly as written, surrounding whitespace included.
pub fn notices_from_str(doc: &str) -> Result<Vec<RawNotice>> {
    let mut reader = Reader::from_str(doc);
    get_notices(&mut reader)
}
