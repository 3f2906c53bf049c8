//! PAD profiler HTTP server.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pad_profiler::adapters::http::{pad_routes, PadAppState};
use pad_profiler::adapters::questions::FileQuestionSource;
use pad_profiler::config::{AppConfig, LogFormat, ServerConfig};
use pad_profiler::ports::QuestionSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let engine = config.analysis.engine()?;

    let mut source = FileQuestionSource::new(
        &config.questionnaire.likert_path,
        &config.questionnaire.scene_path,
    );
    if config.questionnaire.lenient {
        source = source.lenient();
    }
    let bank = source.load().await?;
    if bank.is_empty() {
        tracing::warn!("Question bank is empty; /api/questions will fail until tables are provided");
    }

    let state = PadAppState::new(engine, bank)
        .with_sample_size(config.questionnaire.sample_size)
        .with_top_emotions(config.analysis.top_emotions);

    let app = pad_routes(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        normalization = %engine.normalization(),
        "PAD profiler listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    }
}
