use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::xkcd::ComicRecord;

pub const INFO: &str = "From xkcd.com";

// Field order is the serialized key order, keep both structs alphabetical.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ResultDocument<'a> {
    cartoons: Vec<Cartoon<'a>>,
    info: &'static str,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct Cartoon<'a> {
    cartoon: String,
    text: Option<&'a str>,
    url: &'a str,
}

impl<'a> ResultDocument<'a> {
    pub fn new(records: &'a [ComicRecord]) -> Self {
        let cartoons = records
            .iter()
            .map(|record| Cartoon {
                cartoon: STANDARD.encode(&record.image),
                text: record.caption.as_deref(),
                url: record.image_url.as_str(),
            })
            .collect();

        Self {
            cartoons,
            info: INFO,
        }
    }

    pub fn len(&self) -> usize {
        self.cartoons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cartoons.is_empty()
    }

    /// Four space indented json, with every non-ASCII character escaped.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;

        // serde_json only ever emits valid UTF-8
        let json = String::from_utf8_lossy(&buf);
        Ok(escape_non_ascii(&json))
    }

    /// Overwrites `path` in a single write.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

// Outside of strings the json is pure ASCII, so this only touches string contents.
// DEL is escaped too, it is not printable.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() && c != '\u{7f}' {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            // Writing into a String cannot fail
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}
