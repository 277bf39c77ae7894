//! Photobook server entry point.

use photobook_database::PostgresPhotoRepository;
use photobook_ingest::{PhotoCatalog, PhotoPipeline};
use photobook_server::{
    create_router, init_observability, AppState, ObservabilityConfig, ServerConfig,
};
use photobook_storage::FileSystemStorage;
use photobook_vision::CaptionClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = ServerConfig::from_env();

    let guard = init_observability(&ObservabilityConfig {
        otlp_endpoint: config.otlp_endpoint.clone(),
        log_level: config.log_level.clone(),
        json_logs: config.json_logs,
        ..ObservabilityConfig::default()
    })?;

    // Schema bootstrap: a fresh database serves its first request with the
    // photos table in place.
    let mut conn = photobook_database::establish_connection()?;
    photobook_database::run_pending_migrations(&mut conn)?;
    drop(conn);

    let pool = photobook_database::build_pool()?;
    let photos: Arc<dyn photobook_database::PhotoRepository> =
        Arc::new(PostgresPhotoRepository::new(pool));
    let blobs: Arc<dyn photobook_storage::BlobStorage> =
        Arc::new(FileSystemStorage::new(&config.storage_root)?);
    let captioner: Arc<dyn photobook_vision::Captioner> = Arc::new(CaptionClient::from_env()?);

    let pipeline = Arc::new(PhotoPipeline::new(
        photos.clone(),
        blobs,
        captioner,
    ));
    let catalog = Arc::new(PhotoCatalog::new(photos));

    let router = create_router(AppState::new(pipeline, catalog), config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Photobook server listening");
    axum::serve(listener, router).await?;

    guard.shutdown();
    Ok(())
}
