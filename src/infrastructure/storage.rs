use crate::config::AppConfig;
use crate::services::storage::DiskStorage;
use std::sync::Arc;
use tracing::info;

/// Placeholder entry kept so the otherwise-empty uploads directory
/// survives version control. Excluded from every listing.
pub const PLACEHOLDER_MARKER: &str = ".gitkeep";

pub async fn setup_storage(config: &AppConfig) -> anyhow::Result<Arc<DiskStorage>> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let placeholder = config.upload_dir.join(PLACEHOLDER_MARKER);
    if tokio::fs::metadata(&placeholder).await.is_err() {
        tokio::fs::write(&placeholder, b"").await?;
    }

    info!("📂 Upload directory: {}", config.upload_dir.display());

    Ok(Arc::new(DiskStorage::new(config.upload_dir.clone())))
}
