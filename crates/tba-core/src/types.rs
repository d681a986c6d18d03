//! Value types for operation parameters.

use std::path::PathBuf;

use serde_json::{json, Value};

/// Text formatting mode for `sendMessage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
    Html,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::Html => "HTML",
        }
    }
}

/// Outgoing "chat action" (typing indicator, etc).
///
/// Pick the one matching what the user is about to receive: `Typing` for text,
/// `UploadPhoto` for photos, `RecordVideo`/`UploadVideo` for videos,
/// `RecordAudio`/`UploadAudio` for audio, `UploadDocument` for general files,
/// `FindLocation` for location data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

impl ChatAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatAction::Typing => "typing",
            ChatAction::UploadPhoto => "upload_photo",
            ChatAction::RecordVideo => "record_video",
            ChatAction::UploadVideo => "upload_video",
            ChatAction::RecordAudio => "record_audio",
            ChatAction::UploadAudio => "upload_audio",
            ChatAction::UploadDocument => "upload_document",
            ChatAction::FindLocation => "find_location",
        }
    }
}

/// A file parameter: either a local file to upload or something Telegram
/// already knows (a `file_id` or an HTTP URL), sent as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    Path(PathBuf),
    Remote(String),
}

impl InputFile {
    pub fn path(p: impl Into<PathBuf>) -> Self {
        InputFile::Path(p.into())
    }

    pub fn remote(id_or_url: impl Into<String>) -> Self {
        InputFile::Remote(id_or_url.into())
    }
}

/// Inline keyboard (buttons) attached to a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    fn to_json(&self) -> Value {
        let rows: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| json!({ "text": b.label, "callback_data": b.callback_data }))
                    .collect()
            })
            .collect();
        json!({ "inline_keyboard": rows })
    }
}

/// `reply_markup` parameter. Sent JSON-serialized.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboard),
    Keyboard {
        rows: Vec<Vec<String>>,
        resize: bool,
        one_time: bool,
    },
    RemoveKeyboard,
    ForceReply,
    Raw(Value),
}

impl ReplyMarkup {
    pub fn to_json(&self) -> Value {
        match self {
            ReplyMarkup::InlineKeyboard(kb) => kb.to_json(),
            ReplyMarkup::Keyboard {
                rows,
                resize,
                one_time,
            } => json!({
                "keyboard": rows,
                "resize_keyboard": resize,
                "one_time_keyboard": one_time,
            }),
            ReplyMarkup::RemoveKeyboard => json!({ "remove_keyboard": true }),
            ReplyMarkup::ForceReply => json!({ "force_reply": true }),
            ReplyMarkup::Raw(v) => v.clone(),
        }
    }
}

impl From<InlineKeyboard> for ReplyMarkup {
    fn from(kb: InlineKeyboard) -> Self {
        ReplyMarkup::InlineKeyboard(kb)
    }
}
