use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::{anthropic, bedrock};

/// Which hosted model service completions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceProvider {
    Bedrock,
    Anthropic,
}

impl FromStr for InferenceProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bedrock" => Ok(InferenceProvider::Bedrock),
            "anthropic" => Ok(InferenceProvider::Anthropic),
            other => bail!("Unknown INFERENCE_PROVIDER '{other}' (expected 'bedrock' or 'anthropic')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub appsync_endpoint: String,
    pub appsync_api_key: String,
    pub inference_provider: InferenceProvider,
    pub bedrock_model: String,
    pub aws_region: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    /// Only the request handler dispatches jobs.
    pub prompt_generator_function: Option<String>,
    pub task_distiller_function: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let inference_provider: InferenceProvider =
            or_default("INFERENCE_PROVIDER", "bedrock").parse()?;
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY");
        if inference_provider == InferenceProvider::Anthropic && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY is required when INFERENCE_PROVIDER=anthropic");
        }

        Ok(Config {
            appsync_endpoint: require("APPSYNC_ENDPOINT")?,
            appsync_api_key: require("APPSYNC_API_KEY")?,
            inference_provider,
            bedrock_model: or_default("BEDROCK_MODEL", bedrock::DEFAULT_MODEL),
            aws_region: or_default("AWS_REGION", "us-east-1"),
            anthropic_api_key,
            anthropic_model: or_default("ANTHROPIC_MODEL", anthropic::DEFAULT_MODEL),
            prompt_generator_function: lookup("PROMPT_GENERATOR_FUNCTION"),
            task_distiller_function: lookup("TASK_DISTILLER_FUNCTION"),
            port: or_default("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}

/// True inside a Lambda execution environment.
pub fn running_in_lambda() -> bool {
    std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some()
}
