//! Telegram Bot API adapter (reqwest).
//!
//! `BotClient` owns one HTTP client for its whole lifetime. Every operation is
//! a single exchange: fields are encoded (nothing, form, or multipart when a
//! local file is attached), the status code is checked, then the JSON
//! envelope is decoded and its `result` returned as-is.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use tba_core::{
    config::Config,
    domain::ChatId,
    envelope::Envelope,
    errors::Error,
    fields::{Encoding, FieldValue, Fields},
    inbound::InboundUpdate,
    schema, status, Result,
};

mod methods;
pub mod options;

pub use options::*;

#[derive(Debug)]
pub struct BotClient {
    cfg: Config,
    http: reqwest::Client,
    inbound: Option<InboundUpdate>,
}

impl BotClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(Config::new(token)?)
    }

    pub fn from_config(cfg: Config) -> Result<Self> {
        // Redirects are surfaced as transport errors rather than followed.
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(t) = cfg.request_timeout {
            builder = builder.timeout(t);
        }
        if let Some(t) = cfg.connect_timeout {
            builder = builder.connect_timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| Error::External(format!("http client build error: {e}")))?;

        Ok(Self {
            cfg,
            http,
            inbound: None,
        })
    }

    /// Attach the raw body of an inbound webhook request.
    pub fn with_inbound(self, body: impl Into<String>) -> Self {
        self.with_inbound_update(InboundUpdate::new(body))
    }

    pub fn with_inbound_update(mut self, update: InboundUpdate) -> Self {
        self.inbound = Some(update);
        self
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn inbound(&self) -> Option<&InboundUpdate> {
        self.inbound.as_ref()
    }

    /// Download URL for a `file_path` returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.file_url(),
            file_path.trim_start_matches('/')
        )
    }

    /// Generic dispatch: map positional arguments onto the operation's
    /// declared parameter names, then perform the call.
    pub async fn send(&self, operation: &str, args: Vec<Option<FieldValue>>) -> Result<Value> {
        let fields = schema::fields_for(operation, args)?;
        self.call(operation, fields).await
    }

    /// Perform one API call with already-named fields.
    pub async fn call(&self, method: &str, fields: Fields) -> Result<Value> {
        let url = format!("{}/{method}", self.cfg.api_url());
        let encoding = fields.encoding()?;
        debug!(method, ?encoding, fields = fields.len(), "telegram api call");

        let req = match encoding {
            Encoding::Empty => self.http.get(&url),
            Encoding::Form => self.http.post(&url).form(&fields.form_pairs()?),
            Encoding::Multipart => self.http.post(&url).multipart(multipart_form(&fields).await?),
        };

        let resp = req.send().await.map_err(request_error)?;
        let code = resp.status().as_u16();
        if let Err(e) = status::ensure_acceptable(code) {
            warn!(method, status = code, "telegram api call rejected");
            return Err(e);
        }

        let body = resp.bytes().await.map_err(request_error)?;
        let result = Envelope::decode(&body)?.into_result();
        if let Err(e) = &result {
            debug!(method, error = %e, "telegram api call failed");
        }
        result
    }

    /// Fetch the raw bytes of a file previously resolved with `getFile`.
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let resp = self
            .http
            .get(self.file_url(file_path))
            .send()
            .await
            .map_err(request_error)?;
        status::ensure_acceptable(resp.status().as_u16())?;

        let bytes = resp.bytes().await.map_err(request_error)?;
        debug!(len = bytes.len(), "telegram file downloaded");
        Ok(bytes.to_vec())
    }

    /// `message.chat.id` of the captured inbound update.
    pub fn chat_id(&self) -> Result<ChatId> {
        self.inbound_update()?.chat_id()
    }

    /// `message.text` of the captured inbound update.
    pub fn message_text(&self) -> Result<String> {
        self.inbound_update()?.message_text()
    }

    fn inbound_update(&self) -> Result<&InboundUpdate> {
        self.inbound
            .as_ref()
            .ok_or_else(|| Error::Inbound("no inbound request body was captured".to_string()))
    }
}

// reqwest errors carry the request URL, which embeds the bot token.
fn request_error(e: reqwest::Error) -> Error {
    Error::External(format!("telegram request error: {}", e.without_url()))
}

async fn multipart_form(fields: &Fields) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in fields.iter() {
        form = match value.as_file() {
            Some(path) => form.part(name.to_string(), file_part(path).await?),
            None => form.text(name.to_string(), value.to_wire()?),
        };
    }
    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part> {
    let invalid = |e: std::io::Error| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let resolved = tokio::fs::canonicalize(path).await.map_err(invalid)?;
    let bytes = tokio::fs::read(&resolved).await.map_err(invalid)?;

    let file_name = resolved
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_string();

    Ok(Part::bytes(bytes).file_name(file_name))
}
