use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// One accepted upload. Lives for the duration of a single request; the
/// stored file is removed before the response goes out.
#[derive(Debug)]
pub struct UploadedDocument {
    pub original_name: String,
    pub stored_path: PathBuf,
    pub mime_type: String,
    pub size: usize,
}

/// Token and timing counters reported by the upstream API.
#[derive(Debug, Clone, Default)]
pub struct SummaryUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub total_time: f64,
    pub queue_time: f64,
}

/// Outcome of a successful summarization call.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    pub summary: String,
    pub usage: SummaryUsage,
}

#[derive(Debug)]
pub struct ExtractError(pub String);

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtractError: {}", self.0)
    }
}

impl Error for ExtractError {}

/// Failure kinds of the summarization client, matched by the handler
/// when mapping to HTTP responses.
#[derive(Debug)]
pub enum SummarizeError {
    InvalidApiKey,
    Upstream { status: u16, message: String },
    EmptySummary,
    Transport(String),
}

impl fmt::Display for SummarizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizeError::InvalidApiKey => write!(f, "invalid API key"),
            SummarizeError::Upstream { status, message } => {
                write!(f, "upstream error {}: {}", status, message)
            }
            SummarizeError::EmptySummary => write!(f, "no summary in upstream response"),
            SummarizeError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SummarizeError {}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub usage: UsageBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageBody {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub processing_time: f64,
}

impl From<SummaryResult> for SummarizeResponse {
    fn from(result: SummaryResult) -> Self {
        Self {
            summary: result.summary,
            usage: UsageBody {
                prompt_tokens: result.usage.prompt_tokens,
                completion_tokens: result.usage.completion_tokens,
                total_tokens: result.usage.total_tokens,
                processing_time: result.usage.total_time,
            },
        }
    }
}
