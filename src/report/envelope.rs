use crate::error::CogloadError;
use serde::Serialize;
use serde_json::Value;

/// Wire shape written to stdout for every invocation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success { ok: bool, result: Value },
    Failure { ok: bool, error: String },
}

impl Envelope {
    pub fn success(result: Value) -> Self {
        Envelope::Success { ok: true, result }
    }

    pub fn failure(error: &CogloadError) -> Self {
        Envelope::Failure {
            ok: false,
            error: error.to_string(),
        }
    }
}

pub fn to_json(envelope: &Envelope) -> Result<String, serde_json::Error> {
    serde_json::to_string(envelope)
}
