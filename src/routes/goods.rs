use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::goods::requests::{CreateGoodRequest, UpdateGoodRequest};
use crate::services::GoodService;

// 懒加载的全局 GoodService 实例
static GOOD_SERVICE: Lazy<GoodService> = Lazy::new(GoodService::new_lazy);

// HTTP处理程序
pub async fn create_good(
    req: HttpRequest,
    good_data: web::Json<CreateGoodRequest>,
) -> ActixResult<HttpResponse> {
    GOOD_SERVICE.create_good(good_data.into_inner(), &req).await
}

pub async fn list_goods(req: HttpRequest) -> ActixResult<HttpResponse> {
    GOOD_SERVICE.list_goods(&req).await
}

pub async fn get_good(req: HttpRequest, good_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    GOOD_SERVICE.get_good(good_id.into_inner(), &req).await
}

pub async fn update_good(
    req: HttpRequest,
    good_id: web::Path<i64>,
    update_data: web::Json<UpdateGoodRequest>,
) -> ActixResult<HttpResponse> {
    GOOD_SERVICE
        .update_good(good_id.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_good(req: HttpRequest, good_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    GOOD_SERVICE.delete_good(good_id.into_inner(), &req).await
}

// 配置路由
pub fn configure_good_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/goods")
            .route("", web::post().to(create_good))
            .route("", web::get().to(list_goods))
            .route("/{id}", web::get().to(get_good))
            .route("/{id}", web::patch().to(update_good))
            .route("/{id}", web::delete().to(delete_good)),
    );
}
