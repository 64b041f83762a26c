//! XML PoI parser.
//!
//! Accepts a wrapper holding any number of `<poi>` elements, or a single
//! record element as the document root:
//!
//! ```xml
//! <pois>
//!   <poi>
//!     <pid>X-1</pid>
//!     <pname>XML Museum</pname>
//!     <platitude>48.86</platitude>
//!     <plongitude>2.35</plongitude>
//!     <pcategory>Museum</pcategory>
//!     <pratings>4.7</pratings>
//!   </poi>
//! </pois>
//! ```
//!
//! Every non-root `<poi>` at any depth is a record, yielded in the order the
//! elements open. If the document has none, the root element is read as the
//! record. Fields come from direct children; when a child tag repeats, the
//! first one wins. A second top-level element is an error.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io::BufRead;
use std::path::Path;

use poi_core::{PoiRecord, RawValue, avg_rating, to_float};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::FormatError;

const RECORD_TAG: &str = "poi";

/// An element that has been opened but not yet closed.
#[derive(Debug, Default)]
struct Frame {
    name: String,
    /// Position among record elements in document order; `None` unless this
    /// is a non-root `<poi>`.
    order: Option<usize>,
    /// Text before the first child element, if any.
    text: Option<String>,
    has_children: bool,
    children: HashMap<String, Option<String>>,
}

impl Frame {
    fn child(&self, tag: &str) -> Option<&str> {
        self.children.get(tag).and_then(|text| text.as_deref())
    }

    fn to_record(&self) -> PoiRecord {
        let text = |tag: &str| self.child(tag).unwrap_or("").to_string();

        PoiRecord {
            external_id: text("pid"),
            name: text("pname"),
            category: text("pcategory"),
            latitude: to_float(&RawValue::from(self.child("platitude"))),
            longitude: to_float(&RawValue::from(self.child("plongitude"))),
            avg_rating: avg_rating(&RawValue::from(self.child("pratings"))),
            description: String::new(),
        }
    }
}

/// Streaming iterator over the records of an XML document.
///
/// A record is held back while an enclosing `<poi>` is still open, so nested
/// records come out in opening order. After the first error the iterator is
/// exhausted.
pub struct XmlRecords<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    stack: Vec<Frame>,
    /// Closed records waiting for their enclosing `<poi>` to close.
    pending: BTreeMap<usize, PoiRecord>,
    ready: VecDeque<PoiRecord>,
    next_order: usize,
    emitted: usize,
    seen_root: bool,
    done: bool,
}

/// Read PoI records from XML content.
pub fn read_xml<R: BufRead>(reader: R) -> XmlRecords<R> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    XmlRecords {
        reader: xml,
        buf: Vec::new(),
        stack: Vec::new(),
        pending: BTreeMap::new(),
        ready: VecDeque::new(),
        next_order: 0,
        emitted: 0,
        seen_root: false,
        done: false,
    }
}

/// Open an XML file and read PoI records from it.
pub fn parse_xml_file(
    path: &Path,
) -> Result<XmlRecords<std::io::BufReader<std::fs::File>>, FormatError> {
    let file = std::fs::File::open(path)?;
    Ok(read_xml(std::io::BufReader::new(file)))
}

impl<R: BufRead> XmlRecords<R> {
    fn next_record(&mut self) -> Result<Option<PoiRecord>, FormatError> {
        loop {
            if let Some(record) = self.ready.pop_front() {
                return Ok(Some(record));
            }

            self.buf.clear();
            let closed = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let frame =
                        open_frame(&self.stack, self.seen_root, &mut self.next_order, name)?;
                    self.stack.push(frame);
                    None
                }
                Event::Empty(ref e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    Some(open_frame(
                        &self.stack,
                        self.seen_root,
                        &mut self.next_order,
                        name,
                    )?)
                }
                Event::End(_) => self.stack.pop(),
                Event::Text(ref e) => {
                    let text = e.unescape()?;
                    append_text(&mut self.stack, &text);
                    None
                }
                Event::CData(ref e) => {
                    let text = String::from_utf8_lossy(e).into_owned();
                    append_text(&mut self.stack, &text);
                    None
                }
                Event::Eof => {
                    if let Some(open) = self.stack.last() {
                        return Err(FormatError::invalid_document(format!(
                            "unexpected end of document inside <{}>",
                            open.name
                        )));
                    }
                    if !self.seen_root {
                        return Err(FormatError::invalid_document("no root element"));
                    }
                    return Ok(None);
                }
                _ => None,
            };

            if let Some(frame) = closed {
                self.close(frame);
            }
        }
    }

    /// Attach a closed element to its parent and queue any records that are
    /// no longer enclosed by an open `<poi>`.
    fn close(&mut self, frame: Frame) {
        let Some(parent) = self.stack.last_mut() else {
            self.seen_root = true;
            if self.emitted == 0 {
                self.emitted += 1;
                self.ready.push_back(frame.to_record());
            }
            return;
        };

        parent.has_children = true;
        if let Some(order) = frame.order {
            self.pending.insert(order, frame.to_record());
            self.emitted += 1;
        }
        parent.children.entry(frame.name).or_insert(frame.text);

        if !self.stack.iter().any(|f| f.order.is_some()) {
            self.ready.extend(std::mem::take(&mut self.pending).into_values());
        }
    }
}

/// Start a frame for a newly opened element. Only one top-level element is
/// allowed.
fn open_frame(
    stack: &[Frame],
    seen_root: bool,
    next_order: &mut usize,
    name: String,
) -> Result<Frame, FormatError> {
    if stack.is_empty() && seen_root {
        return Err(FormatError::invalid_document(format!(
            "unexpected <{}> after the root element",
            name
        )));
    }

    let order = (!stack.is_empty() && name == RECORD_TAG).then(|| {
        *next_order += 1;
        *next_order - 1
    });
    Ok(Frame {
        name,
        order,
        ..Default::default()
    })
}

fn append_text(stack: &mut [Frame], text: &str) {
    if let Some(top) = stack.last_mut() {
        if !top.has_children {
            top.text.get_or_insert_with(String::new).push_str(text);
        }
    }
}

impl<R: BufRead> Iterator for XmlRecords<R> {
    type Item = Result<PoiRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;
