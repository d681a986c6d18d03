//! Response envelope: `{ "ok": bool, "result": .., "description": .., "error_code": .. }`.

use serde_json::Value;

use crate::{errors::Error, Result};

/// Decoded response envelope.
#[derive(Clone, Debug, PartialEq)]
pub enum Envelope {
    Success(Value),
    Failure {
        error_code: Option<i64>,
        description: Option<String>,
    },
}

impl Envelope {
    /// Decode a raw response body.
    ///
    /// Invalid JSON is a `MalformedResponse`. Anything that parses but does not
    /// carry `ok: true` (including a missing `ok` or a non-object body) is a
    /// `Failure`.
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut v: Value = serde_json::from_slice(body).map_err(Error::MalformedResponse)?;

        let ok = v.get("ok").and_then(Value::as_bool).unwrap_or(false);
        if !ok {
            return Ok(Envelope::Failure {
                error_code: v.get("error_code").and_then(Value::as_i64),
                description: v
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        match v.get_mut("result").map(Value::take) {
            Some(result) => Ok(Envelope::Success(result)),
            None => Err(Error::MissingResult),
        }
    }

    pub fn into_result(self) -> Result<Value> {
        match self {
            Envelope::Success(v) => Ok(v),
            Envelope::Failure {
                error_code,
                description,
            } => Err(Error::Api {
                error_code,
                description,
            }),
        }
    }
}
