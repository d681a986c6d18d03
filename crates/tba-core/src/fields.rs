//! Named request fields and the encoding they require on the wire.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    domain::{ChatId, MessageId, UserId},
    errors::Error,
    schema::{CERTIFICATE_FIELD, FILE_FIELDS},
    types::{ChatAction, InputFile, ParseMode, ReplyMarkup},
    Result,
};

/// A single parameter value as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Json(Value),
    /// Local file to be uploaded as a multipart attachment.
    File(PathBuf),
}

impl FieldValue {
    /// Wire representation for form / multipart text parts.
    pub fn to_wire(&self) -> Result<String> {
        Ok(match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Json(v) => serde_json::to_string(v)?,
            FieldValue::File(p) => p.display().to_string(),
        })
    }

    pub fn as_file(&self) -> Option<&Path> {
        match self {
            FieldValue::File(p) => Some(p),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        FieldValue::Json(v)
    }
}

impl From<ChatId> for FieldValue {
    fn from(v: ChatId) -> Self {
        FieldValue::Int(v.0)
    }
}

impl From<UserId> for FieldValue {
    fn from(v: UserId) -> Self {
        FieldValue::Int(v.0)
    }
}

impl From<MessageId> for FieldValue {
    fn from(v: MessageId) -> Self {
        FieldValue::Int(i64::from(v.0))
    }
}

impl From<ParseMode> for FieldValue {
    fn from(v: ParseMode) -> Self {
        FieldValue::Text(v.as_str().to_string())
    }
}

impl From<ChatAction> for FieldValue {
    fn from(v: ChatAction) -> Self {
        FieldValue::Text(v.as_str().to_string())
    }
}

impl From<ReplyMarkup> for FieldValue {
    fn from(v: ReplyMarkup) -> Self {
        FieldValue::Json(v.to_json())
    }
}

impl From<InputFile> for FieldValue {
    fn from(v: InputFile) -> Self {
        match v {
            InputFile::Path(p) => FieldValue::File(p),
            InputFile::Remote(s) => FieldValue::Text(s),
        }
    }
}

/// How a request has to be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// No fields: plain GET, no body.
    Empty,
    /// POST `application/x-www-form-urlencoded`.
    Form,
    /// POST `multipart/form-data` with at least one file attachment.
    Multipart,
}

/// Ordered name -> value mapping for one request.
///
/// Only parameters the caller actually supplied are ever present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, keeping first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decide the request encoding.
    ///
    /// A local file is only accepted in an attachment field; finding one there
    /// switches the whole request to multipart.
    pub fn encoding(&self) -> Result<Encoding> {
        if self.entries.is_empty() {
            return Ok(Encoding::Empty);
        }

        let mut multipart = false;
        for (name, value) in &self.entries {
            if value.as_file().is_none() {
                continue;
            }
            if !is_attachment_field(name) {
                return Err(Error::InvalidField {
                    field: name.clone(),
                    reason: "local files can only be uploaded through a file field".to_string(),
                });
            }
            multipart = true;
        }

        Ok(if multipart {
            Encoding::Multipart
        } else {
            Encoding::Form
        })
    }

    /// Fields as wire-ready `(name, value)` string pairs.
    pub fn form_pairs(&self) -> Result<Vec<(String, String)>> {
        self.entries
            .iter()
            .map(|(k, v)| Ok((k.clone(), v.to_wire()?)))
            .collect()
    }
}

pub fn is_attachment_field(name: &str) -> bool {
    FILE_FIELDS.contains(&name) || name == CERTIFICATE_FIELD
}
