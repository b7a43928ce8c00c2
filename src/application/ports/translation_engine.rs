use async_trait::async_trait;

use crate::domain::Language;

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: Language,
    pub target_language: Language,
}

/// External text-translation provider.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslationEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationEngineError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
