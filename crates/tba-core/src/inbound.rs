//! Inbound webhook payload (webhook-receiver mode).
//!
//! Telegram POSTs a JSON-serialized update to the registered webhook URL. The
//! embedding application captures that body once and the accessors project
//! `message.chat.id` and `message.text` out of it.

use std::io::Read;

use serde_json::Value;

use crate::{domain::ChatId, errors::Error, Result};

/// Raw body of one inbound update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundUpdate {
    raw: String,
}

impl InboundUpdate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Read the whole body from `reader` (stdin for CGI-style receivers).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(Self { raw })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn parse(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.raw)?)
    }

    /// `message.chat.id` of the update.
    pub fn chat_id(&self) -> Result<ChatId> {
        let update = self.parse()?;
        update
            .pointer("/message/chat/id")
            .and_then(Value::as_i64)
            .map(ChatId)
            .ok_or_else(|| {
                Error::Inbound("message.chat.id is missing or not an integer".to_string())
            })
    }

    /// `message.text` of the update.
    pub fn message_text(&self) -> Result<String> {
        let update = self.parse()?;
        update
            .pointer("/message/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::Inbound("message.text is missing or not a string".to_string()))
    }
}
