use sharelist::commands::Cli;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sharelist=info,tower_http=info"));
    fmt().with_env_filter(filter).init();

    Cli::menu().await
}
