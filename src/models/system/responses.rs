use serde::Serialize;

// 服务运行信息
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub system_name: String,
    pub environment: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
