//! Request handler: accepts `POST /createPrompt` and `POST /createTask`,
//! creates the record and starts the matching worker function.

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use metaprompt::config::{running_in_lambda, Config};
use metaprompt::logging;
use metaprompt::routes::build_router;
use metaprompt::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(module_path!(), &config.rust_log);

    info!("Starting metaprompt request handler v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config).await?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    if running_in_lambda() {
        info!("Running under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| anyhow!(e));
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
