//! 配置管理
//!
//! 静态配置由配置文件与环境变量组合而成，启动时加载一次。

mod r#impl;
mod structs;

pub use structs::*;
