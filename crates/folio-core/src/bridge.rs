//! AI assistant bridge: visitor questions answered over the site content.
//!
//! Every `ask` sends the literal question plus a system instruction that
//! embeds the full JSON serialization of the current ContentDocument — the
//! whole document, every time. The gateway holds the API key; the front end
//! never sees it. Any failure (missing key, network, non-2xx, malformed
//! body) collapses to one fixed fallback string and is never surfaced to
//! the visitor as an error.

use crate::config::{AiMode, SiteConfig};
use crate::content::ContentDocument;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Shown for any bridge failure. Indistinguishable, by design, from the
/// remote model declining to answer.
pub const FALLBACK_REPLY: &str = "Error connecting to AI services. Please try again later.";

/// Success response with no candidates still yields a reply, not an error.
const EMPTY_REPLY: &str = "I couldn't generate a response.";

/// Canned reply for mock mode (offline development and tests).
pub const MOCK_REPLY: &str =
    "I'm running in offline mode. Ask me again once the live assistant is connected!";

// Gemini generateContent request/response structures
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, thiserror::Error)]
enum BridgeError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("assistant request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("assistant API error {0}")]
    Status(reqwest::StatusCode),
}

/// Bridge to the generative-language endpoint. Read-only over the content:
/// it serializes the document into context but never mutates it.
pub struct AssistantBridge {
    mode: AiMode,
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

impl AssistantBridge {
    pub fn from_config(config: &SiteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            mode: config.ai_mode,
            api_key: config.ai_api_key.clone(),
            model: config
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client,
        }
    }

    /// Answer a visitor question over the given document snapshot. Never
    /// fails: every error path returns [`FALLBACK_REPLY`].
    pub async fn ask(&self, question: &str, doc: &ContentDocument) -> String {
        if self.mode == AiMode::Mock {
            return MOCK_REPLY.to_string();
        }
        match self.generate(question, doc).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("assistant bridge failure: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn generate(&self, question: &str, doc: &ContentDocument) -> Result<String, BridgeError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(BridgeError::MissingApiKey)?;

        let url = format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, self.model, key);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: question.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                parts: vec![Part {
                    text: system_context(doc),
                }],
            }),
        };

        let res = self.client.post(&url).json(&body).send().await?;
        if !res.status().is_success() {
            return Err(BridgeError::Status(res.status()));
        }
        let parsed: GenerateResponse = res.json().await?;
        Ok(extract_reply(parsed))
    }
}

/// The system instruction: persona plus the entire document as JSON, with
/// no truncation or field filtering.
fn system_context(doc: &ContentDocument) -> String {
    let snapshot = serde_json::to_string(doc).unwrap_or_default();
    format!(
        "You are a helpful AI portfolio assistant for {name}. \
         Use the following data to answer questions about her: {snapshot}. \
         She is a UI/UX Designer, Video Editor, and AI & Data Science Student. \
         Keep answers concise, professional, friendly, and under 50 words. \
         If asked about contact info, provide her email: {email}. \
         If the answer isn't in the data, politely say you don't know but \
         suggest contacting her directly.",
        name = doc.profile.name,
        snapshot = snapshot,
        email = doc.profile.email,
    )
}

fn extract_reply(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| EMPTY_REPLY.to_string())
}
