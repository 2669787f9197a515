use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SystemService;
use crate::models::{ErrorResponse, MessageResponse};

pub async fn reset_database(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.reset().await {
        Ok(()) => {
            info!("数据库已重置");
            Ok(HttpResponse::Ok().json(MessageResponse::new("Database reset successfully")))
        }
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
