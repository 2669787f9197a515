use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(user_id.into_inner(), &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: web::Path<i64>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(user_id.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(user_id.into_inner(), &req).await
}

pub async fn list_user_goods(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_user_goods(user_id.into_inner(), &req).await
}

pub async fn list_user_transactions(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .list_user_transactions(user_id.into_inner(), &req)
        .await
}

pub async fn get_user_rating(
    req: HttpRequest,
    user_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user_rating(user_id.into_inner(), &req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::patch().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/goods", web::get().to(list_user_goods))
            .route("/{id}/transactions", web::get().to(list_user_transactions))
            .route("/{id}/rating", web::get().to(get_user_rating)),
    );
}
