//! 商品图片对象存储
//!
//! 后端通过注册表按名称构造，`object_store.type` 选择具体实现。

pub mod local;
pub mod register;

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 上传本地文件，返回对象的公开访问地址
    async fn upload(&self, local_path: &Path, filename: &str) -> Result<String>;

    /// 删除已上传的对象，对象不存在时视为成功
    async fn delete(&self, filename: &str) -> Result<()>;
}

/// 按配置创建对象存储实例
pub fn create_object_store() -> Result<Arc<dyn ObjectStore>> {
    let config = &AppConfig::get().object_store;

    register::debug_object_store_registry();

    let constructor = register::get_object_store_plugin(&config.store_type).ok_or_else(|| {
        CampusError::object_store_plugin_not_found(format!(
            "Object store backend '{}' not found",
            config.store_type
        ))
    })?;

    Ok(Arc::from(constructor(config)?))
}
