use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{telemetry, AppState, ServerConfig, SqliteStore, TodoService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    telemetry::init(config.log_format)?;

    let store = SqliteStore::open(&config.database)?;
    let state = AppState::new(TodoService::new(store)).with_sanitize(config.sanitize);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!(addr = %listener.local_addr()?, sanitize = config.sanitize, "listening");
    todo_server::run(listener, state).await?;
    Ok(())
}
