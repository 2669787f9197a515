use serde::Deserialize;

// 用户创建请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub netid: Option<String>,
}

// 用户更新请求（仅支持修改姓名）
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
}
