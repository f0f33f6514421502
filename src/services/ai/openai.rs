use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::LlmProvider;

const SYSTEM_INSTRUCTION: &str = "You extract booking intents and respond ONLY with JSON.";

/// Any OpenAI-compatible chat completions endpoint.
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        anyhow::ensure!(
            !self.api_key.is_empty(),
            "OPENAI_API_KEY is required when LLM_PROVIDER=openai"
        );

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0.2,
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to call OpenAI API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse OpenAI response")?;

        if !status.is_success() {
            anyhow::bail!("OpenAI API error ({}): {}", status, data);
        }

        let text = data["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .trim()
            .to_string();
        tracing::debug!(raw = %text, "LLM(OpenAI) raw output");
        Ok(text)
    }
}
