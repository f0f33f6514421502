use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::catalog::EventCatalog;

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
    pub catalog: Box<dyn EventCatalog>,
}
