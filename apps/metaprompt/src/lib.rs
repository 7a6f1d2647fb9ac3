pub mod appsync;
pub mod config;
pub mod dispatch;
pub mod distillation;
pub mod errors;
pub mod extract;
pub mod generation;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod routes;
pub mod state;
pub mod workflow;

#[cfg(test)]
mod testing;
