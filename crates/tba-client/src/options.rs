//! Optional parameters per operation.
//!
//! Field order follows the operation's documented parameter order. Anything
//! left as `None` is not sent.

use tba_core::{
    domain::MessageId,
    types::{ParseMode, ReplyMarkup},
};

#[derive(Clone, Debug, Default)]
pub struct SendMessageOptions {
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

/// Shared by operations whose only optional parameters are the reply ones
/// (`sendDocument`, `sendSticker`, `sendLocation`).
#[derive(Clone, Debug, Default)]
pub struct ReplyOptions {
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendPhotoOptions {
    pub caption: Option<String>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendAudioOptions {
    /// Seconds.
    pub duration: Option<u32>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendVideoOptions {
    pub duration: Option<u32>,
    pub caption: Option<String>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendVoiceOptions {
    pub duration: Option<u32>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct UserProfilePhotosOptions {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// `getUpdates` parameters. Calling it repeatedly (long polling) is up to the
/// caller.
#[derive(Clone, Debug, Default)]
pub struct GetUpdatesOptions {
    /// First update id to return; pass last seen `update_id + 1`.
    pub offset: Option<i64>,
    pub limit: Option<u32>,
    /// Long-polling timeout in seconds. Make sure the configured request
    /// timeout is longer than this.
    pub timeout: Option<u32>,
}
