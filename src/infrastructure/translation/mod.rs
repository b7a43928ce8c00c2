mod deepl_engine;
mod mock_engine;

pub use deepl_engine::{DeeplEngine, DEEPL_API_URL};
pub use mock_engine::MockTranslationEngine;
