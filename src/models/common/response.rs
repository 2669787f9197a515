use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::CampusError;

// 统一的错误响应结构：{"error": "..."}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> HttpResponse {
        HttpResponse::BadRequest().json(Self::new(message))
    }

    pub fn not_found(message: impl Into<String>) -> HttpResponse {
        HttpResponse::NotFound().json(Self::new(message))
    }

    pub fn internal(message: impl Into<String>) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self::new(message))
    }

    /// 将业务错误映射为 HTTP 响应
    pub fn from_error(err: &CampusError) -> HttpResponse {
        match err {
            CampusError::NotFound(msg) => Self::not_found(msg.as_str()),
            err if err.is_client_error() => Self::bad_request(err.message()),
            _ => {
                error!("{}", err);
                Self::internal(err.format_simple())
            }
        }
    }
}

// 简单消息响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
