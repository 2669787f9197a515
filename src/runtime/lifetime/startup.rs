use crate::config::AppConfig;
use crate::object_store::{ObjectStore, create_object_store};
use crate::storage::{Storage, create_storage};
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub object_store: Arc<dyn ObjectStore>,
}

/// 确保上传临时目录存在
fn ensure_upload_dirs() {
    let config = AppConfig::get();
    if let Err(e) = std::fs::create_dir_all(&config.upload.temp_dir) {
        warn!(
            "Failed to create upload temp dir {}: {}",
            config.upload.temp_dir, e
        );
    }
}

/// 启动前准备：存储、对象存储
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    ensure_upload_dirs();

    let storage = create_storage()
        .await
        .expect("Failed to initialize storage");

    warn!(
        "Attempting to create {} object store backend",
        config.object_store.store_type
    );
    let object_store = create_object_store().expect("Failed to initialize object store");
    info!(
        "Object store ready, public base: {}",
        config.object_store.public_base()
    );

    StartupContext {
        storage,
        object_store,
    }
}
