use actix_cors::Cors;
use actix_web::http::{header, StatusCode};
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{web, App, HttpServer};
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error;
use crate::handlers;
use crate::services::{
    GroqSummarizer, PdftotextExtractor, SummaryProvider, TextExtractor, UploadStore,
};

pub async fn run() -> std::io::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let host = config.host.clone();
    let port = config.port;

    print_banner(&host, port);
    info!("Server running at http://{}:{}/", host, port);

    let startup_time = Instant::now();

    let store = UploadStore::new(config.upload_dir.clone(), config.max_file_size);
    if let Err(e) = store.ensure_dir().await {
        error!("Failed to create upload dir {:?}: {}", config.upload_dir, e);
        return Err(e);
    }
    let swept = store.sweep_stale();
    if swept > 0 {
        info!("Removed {} stale upload(s) from {:?}", swept, config.upload_dir);
    }

    let extractor: Arc<dyn TextExtractor> = Arc::new(PdftotextExtractor);
    let provider: Arc<dyn SummaryProvider> = Arc::new(GroqSummarizer::from_config(&config));
    let extractor_data = web::Data::from(extractor);
    let provider_data = web::Data::from(provider);

    HttpServer::new(move || {
        let cors = cors_layer(&config.cors_origin);

        App::new()
            .wrap(Logger::default())
            .wrap(ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, error::render_500))
            .wrap(cors)
            .app_data(web::Data::new(store.clone()))
            .app_data(extractor_data.clone())
            .app_data(provider_data.clone())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    info!("Server stopped. Uptime: {:?}", startup_time.elapsed());
    Ok(())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/summarize", web::post().to(handlers::summarize_pdf))
        .route("/healthz", web::get().to(|| async { "OK" }));
}

pub fn cors_layer(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
}

fn print_banner(host: &str, port: u16) {
    let banner = r#"
 ____                                             _
/ ___|  _   _  _ __ ___   _ __ ___    __ _  _ __ (_) ____  ___  _ __
\___ \ | | | || '_ ` _ \ | '_ ` _ \  / _` || '__|| ||_  / / _ \| '__|
 ___) || |_| || | | | | || | | | | || (_| || |   | | / / |  __/| |
|____/  \__,_||_| |_| |_||_| |_| |_| \__,_||_|   |_|/___| \___||_|
"#;
    println!("{}", banner);
    println!("         PDF summarizer started at: http://{}:{}\n", host, port);
}
