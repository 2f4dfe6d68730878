use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Generator, ServiceError};
use crate::consts::{DEFAULT_MODEL, GEMINI_API_URL};

/// Finish reasons that mean the candidate was withheld rather than answered.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

/// A generator backed by the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: Client,
    model: String,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(model: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Point the generator at another host (e.g. a local mock server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(prompt: &str) -> ApiRequest<'_> {
        ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }

    /// Join the text parts of the first candidate. No candidate means no text,
    /// unless the prompt or that candidate was blocked.
    fn parse_response(body: &str) -> Result<String, ServiceError> {
        let resp: ApiResponse = serde_json::from_str(body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        if resp.candidates.is_empty()
            && let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason)
        {
            return Err(ServiceError::Blocked(format!("prompt blocked: {reason}")));
        }

        let Some(candidate) = resp.candidates.into_iter().next() else {
            return Ok(String::new());
        };

        if let Some(reason) = candidate.finish_reason.as_deref()
            && BLOCKING_FINISH_REASONS.contains(&reason)
        {
            return Err(ServiceError::Blocked(format!("response stopped: {reason}")));
        }

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let text = Self::parse_response(&body)?;
        tracing::debug!(response_len = text.len(), "generateContent finished");
        Ok(text)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_applied() {
        let g = GeminiGenerator::new(None, None);
        assert_eq!(g.model(), DEFAULT_MODEL);
    }

    #[test]
    fn endpoint_includes_model() {
        let g = GeminiGenerator::new(Some("gemini-test".into()), None)
            .with_base_url("http://localhost:1234/");
        assert_eq!(
            g.endpoint(),
            "http://localhost:1234/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn request_embeds_prompt() {
        let body = serde_json::to_value(GeminiGenerator::build_request("hi there")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi there");
    }

    #[test]
    fn parse_joins_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}}]}"#;
        assert_eq!(GeminiGenerator::parse_response(body).unwrap(), "Hello, world");
    }

    #[test]
    fn parse_uses_first_candidate_only() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"first"}]}},
            {"content":{"parts":[{"text":"second"}]}}
        ]}"#;
        assert_eq!(GeminiGenerator::parse_response(body).unwrap(), "first");
    }

    #[test]
    fn parse_no_candidates_is_empty() {
        assert_eq!(GeminiGenerator::parse_response("{}").unwrap(), "");
        assert_eq!(
            GeminiGenerator::parse_response(r#"{"candidates":[]}"#).unwrap(),
            ""
        );
    }

    #[test]
    fn parse_candidate_without_content_is_empty() {
        let body = r#"{"candidates":[{"finishReason":"STOP"}]}"#;
        assert_eq!(GeminiGenerator::parse_response(body).unwrap(), "");
    }

    #[test]
    fn parse_blocked_prompt_fails() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = GeminiGenerator::parse_response(body).unwrap_err();
        assert!(matches!(err, ServiceError::Blocked(_)));
    }

    #[test]
    fn parse_feedback_without_block_reason_is_empty() {
        let body = r#"{"candidates":[],"promptFeedback":{"safetyRatings":[]}}"#;
        assert_eq!(GeminiGenerator::parse_response(body).unwrap(), "");
    }

    #[test]
    fn parse_withheld_candidate_fails() {
        for reason in ["SAFETY", "RECITATION"] {
            let body = format!(r#"{{"candidates":[{{"finishReason":"{reason}"}}]}}"#);
            let err = GeminiGenerator::parse_response(&body).unwrap_err();
            assert!(matches!(err, ServiceError::Blocked(ref m) if m.contains(reason)));
        }
    }

    #[test]
    fn parse_max_tokens_keeps_partial_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"cut sh"}]},"finishReason":"MAX_TOKENS"}]}"#;
        assert_eq!(GeminiGenerator::parse_response(body).unwrap(), "cut sh");
    }

    #[test]
    fn parse_invalid_json_fails() {
        let err = GeminiGenerator::parse_response("not json").unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let g = GeminiGenerator::new(None, None).with_base_url("http://127.0.0.1:9");
        assert_eq!(
            g.generate("hello").await.unwrap_err(),
            ServiceError::MissingApiKey
        );
    }
}
