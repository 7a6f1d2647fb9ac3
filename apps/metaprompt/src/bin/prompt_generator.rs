//! Prompt generator worker: `{ promptId, task, variables? }` events.

use lambda_runtime::{service_fn, Error};
use tracing::info;

use metaprompt::config::Config;
use metaprompt::generation::handlers::handle_generation;
use metaprompt::logging;
use metaprompt::state::Services;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init(module_path!(), &config.rust_log);

    let services = Services::from_config(&config).await?;
    info!("Starting prompt generator v{}", env!("CARGO_PKG_VERSION"));

    let services = &services;
    lambda_runtime::run(service_fn(move |event| async move {
        handle_generation(services, event).await
    }))
    .await
}
