//! Ollama連携モジュール
//!
//! ローカルLLM（Ollama の `/api/chat`）で日記を読みやすく書き直す。

use crate::config::Config;
use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// チャットリクエスト
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

/// チャットレスポンス
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OllamaErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ShowRequest<'a> {
    model: &'a str,
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 日記を書き直す
    pub async fn enhance(&self, journal_text: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(journal_text),
            }],
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            },
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| JournalError::Enhance(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<OllamaErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            error!("Ollama API error (status {}): {}", status, message);
            return Err(JournalError::OllamaApi {
                status: status.as_u16(),
                message,
            });
        }

        parse_chat_response(&body)
    }

    /// モデルが取得済みか確認（起動時チェック）
    pub async fn check_model(&self) -> Result<()> {
        info!("Checking Ollama for model: {}...", self.model);

        let unavailable = |detail: String| JournalError::ModelUnavailable {
            model: self.model.clone(),
            detail,
        };

        let response = self
            .http
            .post(format!("{}/api/show", self.base_url))
            .json(&ShowRequest { model: &self.model })
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(unavailable(format!("{}: {}", status, body)));
        }

        info!("Ollama model '{}' found ✅", self.model);
        Ok(())
    }
}

/// 書き直し用プロンプト
pub fn build_prompt(journal_text: &str) -> String {
    format!(
        "Enhance the following journal entry into a more lovable and readable form, \
         incorporating relevant emojis where appropriate. Keep the original meaning and tone. \
         Make it sound warm and reflective. Here is the entry: \n\n\"{}\"",
        journal_text
    )
}

/// `message.content` を取り出す
pub fn parse_chat_response(body: &str) -> Result<String> {
    serde_json::from_str::<ChatResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .and_then(|m| m.content)
        .ok_or(JournalError::OllamaFormat)
}

fn classify_send_error(e: reqwest::Error) -> JournalError {
    if e.is_connect() || e.is_timeout() {
        error!("Connection error to Ollama server: {}", e);
        JournalError::OllamaUnavailable
    } else {
        JournalError::Enhance(e.to_string())
    }
}
