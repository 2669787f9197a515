//! Campus Hub - 课程管理与校园二手市场后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型与序列化视图
//! - `object_store`: 商品图片对象存储
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod object_store;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
