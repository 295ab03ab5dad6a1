//! Request adapter for the word-extraction endpoint.
//!
//! Takes a raw request body `{"text": "..."}` and answers with
//! `{"data": [...], "success": true}` or `{"error": "...", "success": false}`.
//! Transport is left to the caller.

use crate::error::{Error, Result};
use crate::tokenize::{Tokenizer, TokenizerOptions};
use crate::Normalizer;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Success { data: Vec<String>, success: bool },
    Failure { error: String, success: bool },
}

impl ExtractResponse {
    pub fn ok(data: Vec<String>) -> Self {
        ExtractResponse::Success {
            data,
            success: true,
        }
    }

    pub fn failed(error: &Error) -> Self {
        ExtractResponse::Failure {
            error: error.to_string(),
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractResponse::Success { .. })
    }
}

/// Binary payloads are refused before UTF-8 validation so they surface as
/// unsupported input rather than as an encoding error.
pub fn parse_request(body: &[u8]) -> Result<ExtractRequest> {
    if body.contains(&0) {
        return Err(Error::UnsupportedInput("binary payload".to_string()));
    }
    let text = std::str::from_utf8(body)?;
    serde_json::from_str(text).map_err(|e| {
        Error::UnsupportedInput(format!("expected a JSON object with a string \"text\": {e}"))
    })
}

pub fn extract_word(
    body: &[u8],
    normalizer: &Normalizer,
    tokenizer: &dyn Tokenizer,
    options: &TokenizerOptions,
) -> ExtractResponse {
    match parse_request(body) {
        Ok(request) => {
            let text = normalizer.normalize(&request.text);
            ExtractResponse::ok(tokenizer.tokenize(&text, options))
        }
        Err(e) => {
            warn!(error = %e, "rejected extract request");
            ExtractResponse::failed(&e)
        }
    }
}
