//! Chat terminal - a single best-effort call to a generative-text API
//!
//! One request, no retry, no queueing. The public `consult` operation is
//! total: any failure collapses into a per-language fallback string.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::AkashaConfig;
use crate::content::Language;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Client for the chat terminal
pub struct AkashaClient {
    client: Client,
    config: AkashaConfig,
    api_key: String,
}

impl AkashaClient {
    /// Create a client, reading the API key from the configured
    /// environment variable
    pub fn new(config: &AkashaConfig) -> Result<Self, ChatError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| ChatError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            api_key,
        })
    }

    /// Ask the terminal one question
    ///
    /// Always returns something to display: the generated text, or a
    /// fallback phrase in the requested language when the call fails or
    /// comes back empty.
    pub async fn consult(&self, query: &str, lang: Language) -> String {
        match self.generate(query, lang).await {
            Ok(Some(text)) => text,
            Ok(None) => hazy_fallback(lang).to_string(),
            Err(e) => {
                tracing::warn!("Consultation failed: {:#}", e);
                error_fallback(lang).to_string()
            }
        }
    }

    async fn generate(&self, query: &str, lang: Language) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": query }] }],
            "systemInstruction": { "parts": [{ "text": system_instruction(lang) }] },
            "generationConfig": { "temperature": self.config.temperature },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the generative API")?
            .error_for_status()
            .context("Generative API returned an error status")?;

        let generated: GenerateResponse = response
            .json()
            .await
            .context("Failed to decode generative API response")?;

        Ok(extract_text(&generated))
    }
}

fn extract_text(response: &GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<String>();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn system_instruction(lang: Language) -> &'static str {
    match lang {
        Language::En => {
            "You are the Akasha Terminal, a wisdom interface inspired by Nahida from \
             Genshin Impact. You are helpful, kind, gentle, and wise. You speak in a \
             slightly poetic but clear manner. Keep answers concise (under 100 words) \
             unless asked otherwise."
        }
        Language::Cn => {
            "你是虚空终端，一个灵感来自《原神》纳西妲的智慧接口。你乐于助人、善良、\
             温柔且充满智慧。你的语言略带诗意但清晰易懂。保持回答简洁（100字以内），\
             除非另有要求。"
        }
    }
}

fn hazy_fallback(lang: Language) -> &'static str {
    match lang {
        Language::En => "The connection to Irminsul is hazy...",
        Language::Cn => "与世界树的连接有些模糊...",
    }
}

fn error_fallback(lang: Language) -> &'static str {
    match lang {
        Language::En => "I apologize, but I cannot access that knowledge right now.",
        Language::Cn => "很抱歉，我现在无法获取该知识。",
    }
}
