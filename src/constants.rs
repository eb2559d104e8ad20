// src/constants.rs

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

// Fixed sampling parameters for the summarization request
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes documents concisely.";
pub const SUMMARY_TEMPERATURE: f64 = 0.7;
pub const SUMMARY_MAX_TOKENS: u32 = 1024;
pub const SUMMARY_TOP_P: f64 = 0.95;

// Upload handling
pub const UPLOAD_FIELD: &str = "pdf";
pub const PDF_MIME: &str = "application/pdf";
pub const UPLOAD_EXT: &str = "pdf";

// Defaults for environment-backed settings
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
