use serde_json::Value;

use tba_core::{
    domain::{ChatId, MessageId, UserId},
    fields::{FieldValue, Fields},
    schema::CERTIFICATE_FIELD,
    types::{ChatAction, InputFile},
    Result,
};

use crate::{
    options::{
        GetUpdatesOptions, ReplyOptions, SendAudioOptions, SendMessageOptions, SendPhotoOptions,
        SendVideoOptions, SendVoiceOptions, UserProfilePhotosOptions,
    },
    BotClient,
};

fn arg(v: impl Into<FieldValue>) -> Option<FieldValue> {
    Some(v.into())
}

fn string(v: impl Into<String>) -> Option<FieldValue> {
    Some(FieldValue::Text(v.into()))
}

fn opt<T: Into<FieldValue>>(v: Option<T>) -> Option<FieldValue> {
    v.map(Into::into)
}

impl BotClient {
    pub async fn get_me(&self) -> Result<Value> {
        self.send("getMe", vec![]).await
    }

    pub async fn send_message(
        &self,
        chat_id: ChatId,
        text: impl Into<String>,
        opts: SendMessageOptions,
    ) -> Result<Value> {
        self.send(
            "sendMessage",
            vec![
                arg(chat_id),
                string(text),
                opt(opts.parse_mode),
                opt(opts.disable_web_page_preview),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn forward_message(
        &self,
        chat_id: ChatId,
        from_chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<Value> {
        self.send(
            "forwardMessage",
            vec![arg(chat_id), arg(from_chat_id), arg(message_id)],
        )
        .await
    }

    pub async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: InputFile,
        opts: SendPhotoOptions,
    ) -> Result<Value> {
        self.send(
            "sendPhoto",
            vec![
                arg(chat_id),
                arg(photo),
                opt(opts.caption),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_audio(
        &self,
        chat_id: ChatId,
        audio: InputFile,
        opts: SendAudioOptions,
    ) -> Result<Value> {
        self.send(
            "sendAudio",
            vec![
                arg(chat_id),
                arg(audio),
                opt(opts.duration),
                opt(opts.performer),
                opt(opts.title),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_document(
        &self,
        chat_id: ChatId,
        document: InputFile,
        opts: ReplyOptions,
    ) -> Result<Value> {
        self.send(
            "sendDocument",
            vec![
                arg(chat_id),
                arg(document),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    /// `sticker` is a `file_id` or URL; stickers are not uploaded from disk.
    pub async fn send_sticker(
        &self,
        chat_id: ChatId,
        sticker: impl Into<String>,
        opts: ReplyOptions,
    ) -> Result<Value> {
        self.send(
            "sendSticker",
            vec![
                arg(chat_id),
                string(sticker),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_video(
        &self,
        chat_id: ChatId,
        video: InputFile,
        opts: SendVideoOptions,
    ) -> Result<Value> {
        self.send(
            "sendVideo",
            vec![
                arg(chat_id),
                arg(video),
                opt(opts.duration),
                opt(opts.caption),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_voice(
        &self,
        chat_id: ChatId,
        voice: InputFile,
        opts: SendVoiceOptions,
    ) -> Result<Value> {
        self.send(
            "sendVoice",
            vec![
                arg(chat_id),
                arg(voice),
                opt(opts.duration),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_location(
        &self,
        chat_id: ChatId,
        latitude: f64,
        longitude: f64,
        opts: ReplyOptions,
    ) -> Result<Value> {
        self.send(
            "sendLocation",
            vec![
                arg(chat_id),
                arg(latitude),
                arg(longitude),
                opt(opts.reply_to_message_id),
                opt(opts.reply_markup),
            ],
        )
        .await
    }

    pub async fn send_chat_action(&self, chat_id: ChatId, action: ChatAction) -> Result<Value> {
        self.send("sendChatAction", vec![arg(chat_id), arg(action)]).await
    }

    pub async fn get_user_profile_photos(
        &self,
        user_id: UserId,
        opts: UserProfilePhotosOptions,
    ) -> Result<Value> {
        self.send(
            "getUserProfilePhotos",
            vec![arg(user_id), opt(opts.offset), opt(opts.limit)],
        )
        .await
    }

    pub async fn get_updates(&self, opts: GetUpdatesOptions) -> Result<Value> {
        self.send(
            "getUpdates",
            vec![opt(opts.offset), opt(opts.limit), opt(opts.timeout)],
        )
        .await
    }

    pub async fn get_file(&self, file_id: impl Into<String>) -> Result<Value> {
        self.send("getFile", vec![string(file_id)]).await
    }

    /// Register (or, with an empty `url`, remove) the webhook.
    ///
    /// A local certificate is uploaded so Telegram can check the self-signed
    /// root in use.
    pub async fn set_webhook(
        &self,
        url: impl Into<String>,
        certificate: Option<InputFile>,
    ) -> Result<Value> {
        let mut fields = Fields::new().with("url", FieldValue::Text(url.into()));
        if let Some(cert) = certificate {
            fields.insert(CERTIFICATE_FIELD, cert);
        }
        self.call("setWebhook", fields).await
    }
}
