use actix_web::{Error, HttpRequest, HttpResponse, error};
use tracing::debug;

use crate::models::ErrorResponse;

// JSON 请求体解析失败
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON 请求体解析失败 {}: {}", req.path(), err);

    let message = match &err {
        error::JsonPayloadError::OverflowKnownLength { .. }
        | error::JsonPayloadError::Overflow { .. } => "Request body is too large".to_string(),
        _ => format!("Invalid request body: {err}"),
    };

    error::InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message)))
        .into()
}

// 路径参数解析失败（如 ID 不是整数）
pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> Error {
    debug!("路径参数解析失败 {}: {}", req.path(), err);

    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::new("Invalid path parameter")),
    )
    .into()
}
