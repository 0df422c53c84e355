use std::net::SocketAddr;

use clap::Parser;
use eduverse_api::{create_router, tracing::init_tracing_subscriber, AppState};
use eduverse_api::{OpenRouterClient, TavilyClient};
use eduverse_transcripts::TranscriptScraper;

#[derive(Parser)]
#[command(name = "eduverse-api", about = "EduVerse study backend proxy")]
struct Cli {
    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY")]
    openrouter_key: Option<String>,

    /// Default chat completion model
    #[arg(
        long,
        env = "OPENROUTER_MODEL",
        default_value = "deepseek/deepseek-chat-v3-0324:free"
    )]
    openrouter_model: String,

    /// Tavily API key
    #[arg(long, env = "TAVILY_API_KEY")]
    tavily_key: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    if cli.openrouter_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set; /api/openrouter will answer 500");
    }
    if cli.tavily_key.is_none() {
        tracing::warn!("TAVILY_API_KEY not set; search endpoints will answer 500");
    }

    let state = AppState {
        chat: cli.openrouter_key.map(OpenRouterClient::new),
        chat_model: cli.openrouter_model,
        search: cli.tavily_key.map(TavilyClient::new),
        transcripts: TranscriptScraper::default(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "eduverse-api listening");

    axum::serve(listener, app).await?;

    Ok(())
}
