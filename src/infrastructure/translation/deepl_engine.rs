use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationEngine, TranslationEngineError, TranslationRequest};
use crate::domain::Language;

pub const DEEPL_API_URL: &str = "https://api.deepl.com/v2/translate";

/// DeepL v2 text-translation client.
pub struct DeeplEngine {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeeplEngine {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

#[derive(Serialize)]
struct DeeplRequest {
    text: Vec<String>,
    source_lang: &'static str,
    target_lang: &'static str,
}

#[derive(Deserialize)]
struct DeeplResponse {
    translations: Vec<DeeplTranslation>,
}

#[derive(Deserialize)]
struct DeeplTranslation {
    text: String,
}

#[async_trait]
impl TranslationEngine for DeeplEngine {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslationEngineError> {
        let body = DeeplRequest {
            text: vec![request.text.clone()],
            source_lang: deepl_code(request.source_language),
            target_lang: deepl_code(request.target_language),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationEngineError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationEngineError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(TranslationEngineError::ApiRequestFailed(format!(
                "DeepL API returned {}",
                response.status()
            )));
        }

        let parsed: DeeplResponse = response
            .json()
            .await
            .map_err(|e| TranslationEngineError::InvalidResponse(e.to_string()))?;

        match parsed.translations.into_iter().next() {
            Some(t) if !t.text.is_empty() => Ok(t.text),
            Some(_) => Err(TranslationEngineError::InvalidResponse(
                "empty translation".to_string(),
            )),
            None => Err(TranslationEngineError::InvalidResponse(
                "no translations in response".to_string(),
            )),
        }
    }
}

fn deepl_code(language: Language) -> &'static str {
    match language {
        Language::English => "EN",
        Language::French => "FR",
        Language::German => "DE",
        Language::Spanish => "ES",
        Language::Italian => "IT",
        Language::Portuguese => "PT",
        Language::Dutch => "NL",
        Language::Polish => "PL",
        Language::Russian => "RU",
        Language::Japanese => "JA",
        Language::Chinese => "ZH",
        Language::Korean => "KO",
        Language::Arabic => "AR",
        Language::Turkish => "TR",
    }
}
