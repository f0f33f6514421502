pub mod ollama;
pub mod openai;
pub mod prompt;
pub mod response;

use async_trait::async_trait;

use crate::config::AppConfig;

use self::ollama::OllamaProvider;
use self::openai::OpenAiProvider;

/// A text-generation backend: prompt in, raw model text out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

pub fn provider_from_config(config: &AppConfig) -> Box<dyn LlmProvider> {
    match config.llm_provider.as_str() {
        "openai" => {
            if config.openai_api_key.is_empty() {
                tracing::warn!("OPENAI_API_KEY is empty; parse requests will fail until it is set");
            }
            tracing::info!("using OpenAI LLM provider (model: {})", config.openai_model);
            Box::new(OpenAiProvider::new(
                config.openai_base_url.clone(),
                config.openai_api_key.clone(),
                config.openai_model.clone(),
            ))
        }
        _ => {
            tracing::info!(
                "using Ollama LLM provider (url: {}, model: {})",
                config.ollama_host,
                config.ollama_model
            );
            Box::new(OllamaProvider::new(
                config.ollama_host.clone(),
                config.ollama_model.clone(),
            ))
        }
    }
}
