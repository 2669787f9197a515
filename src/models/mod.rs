//! 数据模型定义
//!
//! 每个资源分为 entities（业务实体与关系图）、requests（请求体）、
//! responses（按序列化深度构造的响应视图）。

pub mod assignments;
pub mod common;
pub mod courses;
pub mod goods;
pub mod system;
pub mod transactions;
pub mod users;

pub use common::{ErrorResponse, MessageResponse, SerializeDepth};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
