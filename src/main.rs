use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use lingodesk::application::ports::{JobStore, TranslationEngine};
use lingodesk::application::services::{
    AuthContext, JobService, PipelineTiming, TranslationWorker,
};
use lingodesk::infrastructure::identity::StaticIdentityProvider;
use lingodesk::infrastructure::observability::{init_tracing, TracingConfig};
use lingodesk::infrastructure::persistence::{
    create_pool, run_migrations, MemoryJobStore, PgJobStore,
};
use lingodesk::infrastructure::translation::{DeeplEngine, MockTranslationEngine};
use lingodesk::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let store: Arc<dyn JobStore> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            run_migrations(&pool).await?;
            Arc::new(PgJobStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory job store");
            Arc::new(MemoryJobStore::new())
        }
    };

    let engine: Arc<dyn TranslationEngine> = if settings.translation.api_key.is_empty() {
        tracing::warn!("DEEPL_API_KEY not set, using mock translation engine");
        Arc::new(MockTranslationEngine)
    } else {
        Arc::new(DeeplEngine::new(
            settings.translation.api_key.clone(),
            settings.translation.api_url.clone(),
        ))
    };

    let timing = PipelineTiming {
        processing_delay: Duration::from_millis(settings.pipeline.processing_delay_ms),
        translation_timeout: Duration::from_secs(settings.pipeline.translation_timeout_secs),
    };

    let (worker_tx, worker_rx) = mpsc::channel(64);
    let worker = TranslationWorker::new(worker_rx, Arc::clone(&store), engine, timing);
    tokio::spawn(worker.run());

    let auth = AuthContext::new(Arc::new(StaticIdentityProvider::demo()));
    let job_service = Arc::new(JobService::new(store, auth.clone(), worker_tx));

    let state = AppState { job_service, auth };
    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
