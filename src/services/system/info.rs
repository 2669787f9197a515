use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{AppStartTime, system::responses::SystemInfoResponse};

/// 获取服务运行信息（只读）
pub async fn get_info(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);
    let uptime_seconds = (chrono::Utc::now() - started_at).num_seconds().max(0);

    Ok(HttpResponse::Ok().json(SystemInfoResponse {
        system_name: config.app.system_name.clone(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds,
    }))
}
