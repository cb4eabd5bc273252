//! `fmresultset` decoding
//!
//! Only the parts of the grammar the core consumes are read: the error
//! code, the datasource and resultset counts, and every record's id,
//! modification id and fields. A field with repetitions yields its first
//! `<data>` value. Portal rows (`<relatedset>`) are skipped.

use std::fmt;
use std::str::FromStr;

use fmxml_core::{RawResult, Record, TransportError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::codes::error_text;

/// Decode an `fmresultset` document
///
/// The result's `error_message` is the table text for its error code.
///
/// # Errors
///
/// `TransportError::Parse` for malformed XML, unreadable numeric
/// attributes, or a document without an `<error>` element.
pub fn parse_fmresultset(body: &str) -> Result<RawResult, TransportError> {
    let mut reader = Reader::from_str(body);
    let mut decoder = Decoder::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => decoder.open(&e)?,
            Ok(Event::Empty(e)) => {
                decoder.open(&e)?;
                decoder.close(e.local_name().as_ref());
            }
            Ok(Event::End(e)) => decoder.close(e.local_name().as_ref()),
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(parse_error)?;
                decoder.text(&text);
            }
            Ok(Event::CData(t)) => {
                let raw = t.into_inner();
                decoder.text(&String::from_utf8_lossy(&raw));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(parse_error(format!(
                    "{} at byte {}",
                    e,
                    reader.buffer_position()
                )))
            }
        }
    }

    decoder.finish()
}

#[derive(Default)]
struct Decoder {
    result: RawResult,
    saw_error: bool,
    related_depth: usize,
    record: Option<Record>,
    field: Option<OpenField>,
    data: Option<String>,
}

struct OpenField {
    name: String,
    first: Option<String>,
}

impl Decoder {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), TransportError> {
        let name = e.local_name();
        let name = name.as_ref();
        if name == b"relatedset" {
            self.related_depth += 1;
            return Ok(());
        }
        if self.related_depth > 0 {
            return Ok(());
        }

        match name {
            b"error" => {
                self.result.error_code = numeric(e, "code")?
                    .ok_or_else(|| parse_error("<error> has no code attribute"))?;
                self.saw_error = true;
            }
            b"datasource" => {
                self.result.total_count = numeric(e, "total-count")?;
            }
            b"resultset" => {
                self.result.count = numeric(e, "count")?;
                self.result.fetch_size = numeric(e, "fetch-size")?;
            }
            b"record" => {
                self.record = Some(Record {
                    record_id: numeric(e, "record-id")?,
                    mod_id: numeric(e, "mod-id")?,
                    ..Record::default()
                });
            }
            b"field" if self.record.is_some() => {
                let name = attribute(e, "name")?
                    .ok_or_else(|| parse_error("<field> has no name attribute"))?;
                self.field = Some(OpenField { name, first: None });
            }
            b"data" if self.field.is_some() => {
                self.data = Some(String::new());
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        if name == b"relatedset" {
            self.related_depth = self.related_depth.saturating_sub(1);
            return;
        }
        if self.related_depth > 0 {
            return;
        }

        match name {
            b"data" => {
                if let (Some(text), Some(field)) = (self.data.take(), self.field.as_mut()) {
                    if field.first.is_none() {
                        field.first = Some(text);
                    }
                }
            }
            b"field" => {
                if let (Some(field), Some(record)) = (self.field.take(), self.record.as_mut()) {
                    record
                        .fields
                        .insert(field.name, field.first.unwrap_or_default());
                }
            }
            b"record" => {
                if let Some(record) = self.record.take() {
                    self.result.records.push(record);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.related_depth > 0 {
            return;
        }
        if let Some(data) = self.data.as_mut() {
            data.push_str(text);
        }
    }

    fn finish(mut self) -> Result<RawResult, TransportError> {
        if !self.saw_error {
            return Err(parse_error("response has no <error> element"));
        }
        self.result.error_message = error_text(self.result.error_code).to_string();
        Ok(self.result)
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, TransportError> {
    for attr in e.attributes() {
        let attr = attr.map_err(parse_error)?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(parse_error)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn numeric<T>(e: &BytesStart<'_>, name: &str) -> Result<Option<T>, TransportError>
where
    T: FromStr,
{
    match attribute(e, name)? {
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| parse_error(format!("attribute {}='{}' is not a number", name, raw))),
        None => Ok(None),
    }
}

fn parse_error(err: impl fmt::Display) -> TransportError {
    TransportError::Parse {
        message: err.to_string(),
    }
}
