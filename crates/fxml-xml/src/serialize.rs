//! XML writing: value formatting and rendering of the element tree.
//!
//! - Booleans: lowercase `true`/`false`
//! - Dates: `2008/01/02`; datetimes: `2008/01/02 03:04:05`
//! - Floats: shortest round-trip digits, scientific as `1.0e+20` outside
//!   `1e-4..1e16`, non-finite as `Infinity`, `-Infinity`, `NaN`
//! - Text and attribute values escape `&`, `<`, `>` (and `"` plus line
//!   breaks and tabs in attributes)
//! - Characters outside the XML 1.0 `Char` range are written as `*`
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

use std::borrow::Cow;
use std::io::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};
use fxml_core::{DATE_FORMAT, DATETIME_FORMAT};
use fxml_model::Value;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::error::ProjectionError;
use crate::node::{Content, Element};

/// Format a date as `YYYY/MM/DD`.
///
/// ```
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2008, 1, 2).unwrap();
/// assert_eq!(fxml_xml::format_date(&date), "2008/01/02");
/// ```
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a datetime as `YYYY/MM/DD HH:MM:SS`.
#[must_use]
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

/// The `type` decoration written for a value, if any.
pub(crate) fn type_decoration(value: &Value) -> Option<&'static str> {
    match value {
        Value::Nil | Value::String(_) => None,
        Value::Integer(_) => Some("integer"),
        Value::Float(_) => Some("float"),
        Value::Boolean(_) => Some("boolean"),
        Value::Date(_) => Some("date"),
        Value::DateTime(_) => Some("datetime"),
    }
}

/// Text content of a value; `None` for nil.
pub(crate) fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Nil => None,
        Value::String(s) => Some(s.clone()),
        Value::Integer(v) => Some(v.to_string()),
        Value::Float(v) => Some(format_float(*v)),
        Value::Boolean(v) => Some(if *v { "true" } else { "false" }.to_owned()),
        Value::Date(d) => Some(format_date(d)),
        Value::DateTime(dt) => Some(format_datetime(dt)),
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = v.abs();
    if magnitude > 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{v:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let mantissa = if mantissa.contains('.') {
                mantissa.to_owned()
            } else {
                format!("{mantissa}.0")
            };
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }
    }
    format!("{v:?}")
}

/// Whether a character may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Replace characters XML cannot carry with `*`.
fn xml_safe(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(
            value
                .chars()
                .map(|c| if is_xml_char(c) { c } else { '*' })
                .collect(),
        )
    }
}

/// Render an element tree as a document.
pub(crate) fn render(
    root: &Element,
    indent: usize,
    skip_instruct: bool,
) -> Result<String, ProjectionError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = if indent > 0 {
        Writer::new_with_indent(&mut buf, b' ', indent)
    } else {
        Writer::new(&mut buf)
    };

    if !skip_instruct {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, root)?;

    Ok(String::from_utf8(buf)?)
}

/// Write one element and its subtree.
fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let mut start = writer.create_element(element.name.as_str());
    for (key, value) in &element.attributes {
        let escaped = escape_attribute(value);
        start = start.with_attribute((key.as_bytes(), escaped.as_bytes()));
    }

    match &element.content {
        Content::Text(text) => {
            let text = xml_safe(text);
            start.write_text_content(BytesText::from_escaped(partial_escape(&*text)))?;
        }
        Content::Children(children) if !children.is_empty() => {
            start.write_inner_content(|w| {
                for child in children {
                    write_element(w, child)?;
                }
                Ok(())
            })?;
        }
        Content::Empty | Content::Children(_) => {
            start.write_empty()?;
        }
    }
    Ok(())
}

/// Escape an attribute value, leaving apostrophes readable.
///
/// Line breaks and tabs become character references so parsers do not
/// normalize them to spaces.
fn escape_attribute(value: &str) -> String {
    let value = xml_safe(value);
    let mut out = String::with_capacity(value.len());
    for c in partial_escape(&*value).chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out
}
