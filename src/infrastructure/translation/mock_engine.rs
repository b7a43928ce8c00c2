use async_trait::async_trait;

use crate::application::ports::{TranslationEngine, TranslationEngineError, TranslationRequest};

/// Pass-through engine for runs without a provider API key. Returns the
/// input text tagged with the target language.
pub struct MockTranslationEngine;

#[async_trait]
impl TranslationEngine for MockTranslationEngine {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslationEngineError> {
        Ok(format!(
            "[{}] {}",
            request.target_language.as_str(),
            request.text
        ))
    }
}
