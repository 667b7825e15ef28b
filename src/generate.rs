//! Generation client — the single outbound call to the completion service.
//!
//! One authenticated request, one response, no retries, no streaming. The
//! credential is passed in at construction; there is no ambient client state.
//! Failures are categorized so the controller can show the user what actually
//! went wrong.

use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::config::GenerationConfig;

/// What went wrong talking to the generation service.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no credential configured — set one with `quotebook key set`")]
    MissingCredential,
    #[error("the generation service rejected the credential")]
    AuthRejected,
    #[error("could not reach the generation service: {0}")]
    Network(#[from] reqwest::Error),
    #[error("the generation service returned an empty or unreadable response")]
    EmptyResponse,
}

/// Lead-ins the model tends to wrap quotes in; stripped before returning.
const BOILERPLATE_PREFIXES: &[&str] = &[
    "here is a quote:",
    "here's a quote:",
    "here is your quote:",
    "here's your quote:",
    "sure, here's a quote:",
    "sure! here's a quote:",
    "quote:",
];

const SYSTEM_PROMPT: &str = "You write a single short, original, inspiring quote. \
Respond with the quote text only — no attribution, no commentary.";

/// Client for the remote completion endpoint.
#[derive(Debug)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    credential: String,
}

impl GenerationClient {
    /// Build a client from configuration and the stored credential. Fails
    /// immediately if no credential was supplied.
    pub fn new(
        config: &GenerationConfig,
        credential: Option<String>,
    ) -> Result<Self, GenerateError> {
        let credential = credential.ok_or(GenerateError::MissingCredential)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            credential,
        })
    }

    /// Request one quote from the service. With no prompt, the service picks
    /// the theme.
    pub async fn generate_quote(&self, prompt: Option<&str>) -> Result<String, GenerateError> {
        let user_prompt = match prompt {
            Some(p) => format!("Write a short inspiring quote about: {p}"),
            None => "Write a short inspiring quote.".to_string(),
        };

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_prompt},
            ],
            "max_tokens": 80,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GenerateError::AuthRejected);
        }
        let response = response.error_for_status()?;

        let payload: Value = response.json().await?;
        let raw = extract_text(&payload).ok_or(GenerateError::EmptyResponse)?;
        let cleaned = clean_quote(&raw);
        if cleaned.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        tracing::debug!(chars = cleaned.len(), "quote generated");
        Ok(cleaned)
    }

    /// Confirm the credential is accepted by the service with a minimal-cost
    /// request. `Ok(false)` means the service answered and said no.
    pub async fn validate_credential(&self) -> Result<bool, GenerateError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": "ping"}],
            "max_tokens": 1,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(false);
        }
        response.error_for_status()?;
        Ok(true)
    }
}

/// Pull the completion text out of whichever response shape the service used:
/// chat (`choices[0].message.content`), legacy (`choices[0].text`), or the
/// flattened `output_text`.
fn extract_text(payload: &Value) -> Option<String> {
    let candidate = payload
        .pointer("/choices/0/message/content")
        .or_else(|| payload.pointer("/choices/0/text"))
        .or_else(|| payload.pointer("/output_text"))?;
    let text = candidate.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Strip known boilerplate lead-ins and surrounding quotation marks.
fn clean_quote(raw: &str) -> String {
    let mut text = raw.trim();

    let lowered = text.to_lowercase();
    for prefix in BOILERPLATE_PREFIXES {
        if lowered.starts_with(prefix) {
            text = text[prefix.len()..].trim_start();
            break;
        }
    }

    text.trim_matches(|c| matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_fails_at_construction() {
        let config = GenerationConfig::default();
        let err = GenerationClient::new(&config, None).unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential));
    }

    #[test]
    fn extract_text_reads_chat_shape() {
        let payload = json!({
            "choices": [{"message": {"content": "Stay curious."}}]
        });
        assert_eq!(extract_text(&payload).as_deref(), Some("Stay curious."));
    }

    #[test]
    fn extract_text_reads_legacy_completion_shape() {
        let payload = json!({
            "choices": [{"text": "  Stay curious.  "}]
        });
        assert_eq!(extract_text(&payload).as_deref(), Some("Stay curious."));
    }

    #[test]
    fn extract_text_reads_flattened_shape() {
        let payload = json!({"output_text": "Stay curious."});
        assert_eq!(extract_text(&payload).as_deref(), Some("Stay curious."));
    }

    #[test]
    fn extract_text_rejects_empty_and_unknown_shapes() {
        assert!(extract_text(&json!({})).is_none());
        assert!(extract_text(&json!({"choices": []})).is_none());
        assert!(extract_text(&json!({"choices": [{"message": {"content": "   "}}]})).is_none());
        assert!(extract_text(&json!({"choices": [{"message": {"content": 42}}]})).is_none());
    }

    #[test]
    fn clean_quote_strips_boilerplate_prefix() {
        assert_eq!(
            clean_quote("Here's a quote: Stay curious."),
            "Stay curious."
        );
        assert_eq!(clean_quote("Quote: Stay curious."), "Stay curious.");
    }

    #[test]
    fn clean_quote_strips_surrounding_quotation_marks() {
        assert_eq!(clean_quote("\"Stay curious.\""), "Stay curious.");
        assert_eq!(clean_quote("\u{201C}Stay curious.\u{201D}"), "Stay curious.");
    }

    #[test]
    fn clean_quote_strips_prefix_then_marks() {
        assert_eq!(
            clean_quote("Here is a quote: \"Stay curious.\""),
            "Stay curious."
        );
    }

    #[test]
    fn clean_quote_leaves_interior_punctuation_alone() {
        assert_eq!(
            clean_quote("Say \"yes\" more often."),
            "Say \"yes\" more often."
        );
    }
}
