use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::utils::logging::init_logging_default;
use server::routes::{self, AppState};
use service::storage::{json_table::JsonUserTable, UserTable};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    // config.toml is optional; USERS_TABLE/SERVER_* env vars win over it
    let cfg = configs::AppConfig::load_and_validate()?;
    common::env::ensure_env(&cfg.table.path).await?;

    let users: Arc<dyn UserTable> = JsonUserTable::new(&cfg.table.path).await?;
    let router = routes::build_router(AppState { users }, CorsLayer::very_permissive());

    let host = env::var("SERVER_HOST").unwrap_or(cfg.server.host);
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!(%addr, table = %cfg.table.path, "starting users api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
