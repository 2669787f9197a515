use serde::Deserialize;

use crate::models::common::serde_helpers::deserialize_optional_i64;

// 创建作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub due_date: Option<i64>,
}
