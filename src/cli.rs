use clap::{Parser, Subcommand};
use std::path::Path;

use crate::config::Config;
use crate::services::{GroqSummarizer, PdftotextExtractor, SummaryProvider, TextExtractor};

#[derive(Parser)]
#[command(name = "pdf-summarizer")]
#[command(author, version, about = "PDF summarization service backed by the Groq API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve,

    /// Summarize a local PDF and print the result
    Summarize {
        /// Path to the PDF file
        file: String,
    },
}

pub fn handle_summarize(file: &str) {
    if let Err(e) = run_summarize(file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_summarize(file: &str) -> anyhow::Result<()> {
    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    let extractor = PdftotextExtractor;
    let provider = GroqSummarizer::from_config(&config);

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async {
        let text = extractor.extract_text(Path::new(file)).await?;
        anyhow::Ok(provider.summarize(&text).await?)
    })?;

    println!("{}", result.summary);
    println!();
    println!(
        "Tokens: {} prompt + {} completion = {} total",
        result.usage.prompt_tokens, result.usage.completion_tokens, result.usage.total_tokens
    );
    println!(
        "Processing time: {:.3}s ({:.3}s queued)",
        result.usage.total_time, result.usage.queue_time
    );
    Ok(())
}
