use std::path::Path;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::models::ExtractError;

lazy_static::lazy_static! {
    static ref INLINE_WS_RE: regex::Regex = regex::Regex::new(r"[ \t\x0b\x0c]+").unwrap();
}

/// Turns a stored PDF into the text that gets summarized. Injected so the
/// handler can be driven without poppler installed.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
    fn extractor_id(&self) -> &'static str;
}

/// Extraction via the poppler `pdftotext` CLI.
pub struct PdftotextExtractor;

#[async_trait]
impl TextExtractor for PdftotextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let output = Command::new("pdftotext")
            .arg("-q")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-")
            .output()
            .await
            .map_err(|e| ExtractError(format!("Failed to execute pdftotext: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError(format!(
                "pdftotext failed: {}",
                stderr.trim()
            )));
        }

        let text = normalize_whitespace(&String::from_utf8_lossy(&output.stdout));
        debug!(
            "Extracted {} chars from {:?} via {}",
            text.len(),
            path,
            self.extractor_id()
        );

        if text.is_empty() {
            return Err(ExtractError("No text extracted from PDF".to_string()));
        }
        Ok(text)
    }

    fn extractor_id(&self) -> &'static str {
        "pdftotext"
    }
}

/// Collapses runs of inline whitespace and blank lines; pdftotext output is
/// full of layout artifacts that only waste prompt tokens.
fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0;

    for line in raw.lines() {
        let line = INLINE_WS_RE.replace_all(line.trim(), " ");
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        blank_run = 0;
        out.push_str(&line);
    }

    out
}
