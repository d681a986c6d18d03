//! Static parameter schema for every remote operation.
//!
//! Each operation maps to its documented parameter names in call order, so a
//! positional argument list can be turned into named fields without any
//! runtime introspection.

use crate::{
    errors::Error,
    fields::{FieldValue, Fields},
    Result,
};

/// Fields whose value may be a local file that has to be uploaded.
pub const FILE_FIELDS: [&str; 5] = ["photo", "document", "audio", "video", "voice"];

/// `setWebhook` certificate; uploaded the same way as the file fields.
pub const CERTIFICATE_FIELD: &str = "certificate";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: "getMe",
        params: &[],
    },
    Operation {
        name: "sendMessage",
        params: &[
            "chat_id",
            "text",
            "parse_mode",
            "disable_web_page_preview",
            "reply_to_message_id",
            "reply_markup",
        ],
    },
    Operation {
        name: "forwardMessage",
        params: &["chat_id", "from_chat_id", "message_id"],
    },
    Operation {
        name: "sendPhoto",
        params: &["chat_id", "photo", "caption", "reply_to_message_id", "reply_markup"],
    },
    Operation {
        name: "sendAudio",
        params: &[
            "chat_id",
            "audio",
            "duration",
            "performer",
            "title",
            "reply_to_message_id",
            "reply_markup",
        ],
    },
    Operation {
        name: "sendDocument",
        params: &["chat_id", "document", "reply_to_message_id", "reply_markup"],
    },
    Operation {
        name: "sendSticker",
        params: &["chat_id", "sticker", "reply_to_message_id", "reply_markup"],
    },
    Operation {
        name: "sendVideo",
        params: &[
            "chat_id",
            "video",
            "duration",
            "caption",
            "reply_to_message_id",
            "reply_markup",
        ],
    },
    Operation {
        name: "sendVoice",
        params: &["chat_id", "voice", "duration", "reply_to_message_id", "reply_markup"],
    },
    Operation {
        name: "sendLocation",
        params: &["chat_id", "latitude", "longitude", "reply_to_message_id", "reply_markup"],
    },
    Operation {
        name: "sendChatAction",
        params: &["chat_id", "action"],
    },
    Operation {
        name: "getUserProfilePhotos",
        params: &["user_id", "offset", "limit"],
    },
    Operation {
        name: "getUpdates",
        params: &["offset", "limit", "timeout"],
    },
    Operation {
        name: "getFile",
        params: &["file_id"],
    },
];

pub fn lookup(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Pair positional arguments with the operation's parameter names.
///
/// `None` positions are skipped entirely: an omitted parameter never shows up
/// in the resulting fields.
pub fn fields_for(operation: &str, args: Vec<Option<FieldValue>>) -> Result<Fields> {
    let op = lookup(operation).ok_or_else(|| Error::UnknownOperation(operation.to_string()))?;
    if args.len() > op.params.len() {
        return Err(Error::TooManyArguments {
            operation: operation.to_string(),
            expected: op.params.len(),
            got: args.len(),
        });
    }

    let mut fields = Fields::new();
    for (name, value) in op.params.iter().zip(args) {
        if let Some(v) = value {
            fields.insert(*name, v);
        }
    }
    Ok(fields)
}
