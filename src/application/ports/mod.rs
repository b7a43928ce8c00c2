mod identity_provider;
mod job_store;
mod store_error;
mod translation_engine;

pub use identity_provider::IdentityProvider;
pub use job_store::JobStore;
pub use store_error::StoreError;
pub use translation_engine::{TranslationEngine, TranslationEngineError, TranslationRequest};
