use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::info;

use crate::appsync::{AppSyncClient, RecordStore};
use crate::config::{Config, InferenceProvider};
use crate::dispatch::{JobDispatcher, LambdaDispatcher};
use crate::llm_client::{AnthropicBackend, BedrockBackend, InferenceBackend};

/// Clients a worker function needs. Built once per process and shared by
/// every invocation.
#[derive(Clone)]
pub struct Services {
    pub llm: Arc<dyn InferenceBackend>,
    pub records: Arc<dyn RecordStore>,
}

/// Shared state injected into the request API's route handlers.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordStore>,
    pub dispatcher: Arc<dyn JobDispatcher>,
}

pub async fn load_aws_config(config: &Config) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await
}

fn appsync_client(config: &Config) -> Result<Arc<AppSyncClient>> {
    let client = AppSyncClient::new(
        config.appsync_endpoint.clone(),
        config.appsync_api_key.clone(),
    )?;
    Ok(Arc::new(client))
}

impl Services {
    pub async fn from_config(config: &Config) -> Result<Self> {
        let llm: Arc<dyn InferenceBackend> = match config.inference_provider {
            InferenceProvider::Bedrock => {
                let sdk_config = load_aws_config(config).await;
                Arc::new(BedrockBackend::new(
                    aws_sdk_bedrockruntime::Client::new(&sdk_config),
                    config.bedrock_model.clone(),
                ))
            }
            InferenceProvider::Anthropic => {
                let api_key = config
                    .anthropic_api_key
                    .clone()
                    .context("ANTHROPIC_API_KEY is required when INFERENCE_PROVIDER=anthropic")?;
                Arc::new(AnthropicBackend::new(
                    api_key,
                    config.anthropic_model.clone(),
                )?)
            }
        };
        info!(
            "Inference backend initialized ({:?}, model: {})",
            config.inference_provider,
            llm.model()
        );

        Ok(Self {
            llm,
            records: appsync_client(config)?,
        })
    }
}

impl AppState {
    pub async fn from_config(config: &Config) -> Result<Self> {
        let generator = config
            .prompt_generator_function
            .clone()
            .context("Required environment variable 'PROMPT_GENERATOR_FUNCTION' is not set")?;
        let distiller = config
            .task_distiller_function
            .clone()
            .context("Required environment variable 'TASK_DISTILLER_FUNCTION' is not set")?;

        let sdk_config = load_aws_config(config).await;
        let dispatcher = LambdaDispatcher::new(
            aws_sdk_lambda::Client::new(&sdk_config),
            generator,
            distiller,
        );
        info!("Lambda dispatcher initialized");

        Ok(Self {
            records: appsync_client(config)?,
            dispatcher: Arc::new(dispatcher),
        })
    }
}
