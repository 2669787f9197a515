use serde::Deserialize;

use crate::models::common::serde_helpers::deserialize_optional_i64;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

// 添加课程成员请求
//
// `type` 取值 instructor / student，在服务层解析为 CourseRole
#[derive(Debug, Deserialize)]
pub struct AddCourseMemberRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub role: Option<String>,
}
