pub mod envelope;

use crate::error::{CogloadError, Result};
use envelope::Envelope;
use serde_json::Value;

pub fn render(outcome: &Result<Value>) -> Result<String> {
    let envelope = match outcome {
        Ok(result) => Envelope::success(result.clone()),
        Err(error) => Envelope::failure(error),
    };
    envelope::to_json(&envelope).map_err(CogloadError::Json)
}
