use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use crate::config::Config;
use crate::constants;
use crate::models::{SummarizeError, SummaryResult, SummaryUsage};

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError>;
    fn provider_id(&self) -> &'static str;
}

pub struct GroqSummarizer {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GroqSummarizer {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.groq_api_key.clone(), config.groq_model.clone())
    }
}

#[async_trait]
impl SummaryProvider for GroqSummarizer {
    // One attempt, no retry. A failed call surfaces as-is.
    async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        debug!(
            "Requesting summary from {} ({} chars of input)",
            self.model,
            text.len()
        );

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": constants::SUMMARY_SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": build_user_prompt(text)
                }
            ],
            "temperature": constants::SUMMARY_TEMPERATURE,
            "max_tokens": constants::SUMMARY_MAX_TOKENS,
            "top_p": constants::SUMMARY_TOP_P
        });

        let response = self
            .client
            .post(constants::GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::Transport(format!("Failed to reach Groq API: {}", e)))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            SummarizeError::Transport(format!("Failed to read Groq response: {}", e))
        })?;

        let result = parse_response(status, &body)?;
        info!(
            "Summarization done via {}: {} prompt + {} completion = {} tokens, {:.3}s upstream ({:.3}s queued)",
            self.provider_id(),
            result.usage.prompt_tokens,
            result.usage.completion_tokens,
            result.usage.total_tokens,
            result.usage.total_time,
            result.usage.queue_time
        );
        Ok(result)
    }

    fn provider_id(&self) -> &'static str {
        "groq"
    }
}

fn build_user_prompt(text: &str) -> String {
    format!("Summarize the following document:\n\n{}", text)
}

fn parse_response(status: u16, body: &str) -> Result<SummaryResult, SummarizeError> {
    if status == 401 {
        return Err(SummarizeError::InvalidApiKey);
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string));
        return Err(match message {
            Some(message) => SummarizeError::Upstream { status, message },
            None => SummarizeError::Transport(format!(
                "Groq API returned status {}: {}",
                status, body
            )),
        });
    }

    let result: Value = serde_json::from_str(body)
        .map_err(|e| SummarizeError::Transport(format!("Failed to parse Groq response: {}", e)))?;

    let summary = result["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string();
    if summary.is_empty() {
        return Err(SummarizeError::EmptySummary);
    }

    let usage = &result["usage"];
    let usage = SummaryUsage {
        prompt_tokens: usage["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        completion_tokens: usage["completion_tokens"].as_u64().unwrap_or(0) as u32,
        total_tokens: usage["total_tokens"].as_u64().unwrap_or(0) as u32,
        total_time: usage["total_time"].as_f64().unwrap_or(0.0),
        queue_time: usage["queue_time"].as_f64().unwrap_or(0.0),
    };

    Ok(SummaryResult { summary, usage })
}
