use clap::Parser;

use pdf_summarizer::cli::{self, Cli, Commands};
use pdf_summarizer::server;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Serve) | None => {
            if let Err(e) = actix_web::rt::System::new().block_on(server::run()) {
                eprintln!("Server error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Summarize { file }) => cli::handle_summarize(file),
    }
}
