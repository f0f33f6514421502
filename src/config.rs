use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://tiger-tixs.vercel.app";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub client_base: String,
    pub llm_provider: String,
    pub ollama_host: String,
    pub ollama_model: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6101),
            client_base: env::var("CLIENT_BASE")
                .unwrap_or_else(|_| "http://localhost:6001".to_string())
                .trim_end_matches('/')
                .to_string(),
            llm_provider: env::var("LLM_PROVIDER")
                .unwrap_or_else(|_| "ollama".to_string())
                .to_lowercase(),
            ollama_host: env::var("OLLAMA_HOST")
                .or_else(|_| env::var("OLLAMA_API_URL"))
                .unwrap_or_else(|_| "http://localhost:11434".to_string())
                .trim_end_matches('/')
                .to_string(),
            ollama_model: env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| "llama3.1:latest".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        }
    }
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empty() {
        let origins = parse_origins(" http://a.test , ,https://b.test,");
        assert_eq!(origins, vec!["http://a.test", "https://b.test"]);
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("").is_empty());
    }
}
