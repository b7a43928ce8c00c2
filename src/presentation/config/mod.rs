mod settings;

pub use settings::{
    DatabaseSettings, PipelineSettings, ServerSettings, Settings, TranslationSettings,
};
