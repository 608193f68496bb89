//! Response envelope: every VoIP.ms JSON body carries a `status` field.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
/// Decoded response envelope. `status` is pulled out for inspection; the
/// rest of the payload is kept verbatim.
pub(crate) struct Envelope {
    pub(crate) status: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl Envelope {
    /// Reassemble the full JSON body, `status` included, for the caller.
    pub(crate) fn into_body(mut self) -> Value {
        self.rest
            .insert("status".to_owned(), Value::String(self.status));
        Value::Object(self.rest)
    }
}

pub(crate) fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    Ok(serde_json::from_str(json)?)
}
