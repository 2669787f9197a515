use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ErrorResponse,
    goods::responses::{GoodListResponse, GoodView},
};

pub async fn list_user_goods(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_graph(user_id).await {
        Ok(Some(graph)) => Ok(HttpResponse::Ok().json(GoodListResponse {
            goods: graph.goods.iter().map(GoodView::simple).collect(),
        })),
        Ok(None) => Ok(ErrorResponse::not_found("User not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
