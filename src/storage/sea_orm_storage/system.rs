use super::SeaOrmStorage;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use tracing::warn;

impl SeaOrmStorage {
    /// 重置数据库：回滚并重新执行全部迁移
    pub async fn reset_impl(&self) -> Result<()> {
        warn!("正在重置数据库，所有数据将被清空");

        Migrator::refresh(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("重置数据库失败: {e}")))
    }
}
