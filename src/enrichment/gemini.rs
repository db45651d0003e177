//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{EnrichmentError, EnrichmentSource};
use crate::config::ExplorerConfig;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Build the request prompt for a subject.
pub fn prompt_for(subject: &str) -> String {
    format!(
        "请详细介绍深空探测对象：{subject}。内容包括：1. 概述 2. 主要科学发现 3. 正在进行或已完成的任务 4. 对人类的意义。请使用专业且富有科技感的语气，并分段落。"
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct Part {
    text: Option<String>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: Content,
}

/// Extract the generated text from a `generateContent` reply body.
///
/// Text parts of the first candidate are concatenated; a reply with no
/// non-blank text is [`EnrichmentError::Empty`].
pub fn parse_response(body: &str) -> Result<String, EnrichmentError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(EnrichmentError::Empty)
    } else {
        Ok(text)
    }
}

/// Blocking client for the Gemini text-generation API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl GeminiClient {
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: config.request_timeout(),
        }
    }

    fn url(&self) -> String {
        format!("{ENDPOINT}/{}:generateContent", self.model)
    }
}

impl EnrichmentSource for GeminiClient {
    fn describe(&self, subject: &str) -> Result<String, EnrichmentError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(EnrichmentError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt_for(subject)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent
            .post(&self.url())
            .set("x-goog-api-key", api_key)
            .send_json(&request)
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => EnrichmentError::Status(code),
                ureq::Error::Transport(transport) => {
                    EnrichmentError::Transport(transport.to_string())
                }
            })?;

        let body = response
            .into_string()
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?;
        parse_response(&body)
    }
}
