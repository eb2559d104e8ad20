use std::path::PathBuf;

use crate::constants;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub groq_api_key: String,
    pub groq_model: String,
    pub upload_dir: PathBuf,
    pub max_file_size: usize,
    pub cors_origin: String,
}

impl Config {
    /// Reads the environment once at startup. Only `GROQ_API_KEY` is
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // The lookup is a parameter so tests never have to mutate the
    // process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_api_key = lookup("GROQ_API_KEY")
            .ok_or_else(|| "GROQ_API_KEY environment variable is not set".to_string())?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| constants::DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),
            groq_api_key,
            groq_model: lookup("GROQ_MODEL")
                .unwrap_or_else(|| constants::DEFAULT_GROQ_MODEL.to_string()),
            upload_dir: PathBuf::from(
                lookup("UPLOAD_DIR").unwrap_or_else(|| constants::DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_file_size: lookup("MAX_FILE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(constants::DEFAULT_MAX_FILE_SIZE),
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| constants::DEFAULT_CORS_ORIGIN.to_string()),
        })
    }
}
