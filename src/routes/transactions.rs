use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::transactions::requests::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::services::TransactionService;

// 懒加载的全局 TransactionService 实例
static TRANSACTION_SERVICE: Lazy<TransactionService> = Lazy::new(TransactionService::new_lazy);

// HTTP处理程序
pub async fn create_transaction(
    req: HttpRequest,
    transaction_data: web::Json<CreateTransactionRequest>,
) -> ActixResult<HttpResponse> {
    TRANSACTION_SERVICE
        .create_transaction(transaction_data.into_inner(), &req)
        .await
}

pub async fn rate_transaction(
    req: HttpRequest,
    transaction_id: web::Path<i64>,
    rating_data: web::Json<UpdateTransactionRequest>,
) -> ActixResult<HttpResponse> {
    TRANSACTION_SERVICE
        .rate_transaction(transaction_id.into_inner(), rating_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_transaction_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/transactions")
            .route("", web::post().to(create_transaction))
            .route("/{id}", web::patch().to(rate_transaction)),
    );
}
