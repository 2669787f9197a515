use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ErrorResponse, SerializeDepth, users::responses::UserView};

pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let graph = match storage.get_user_graph(user_id).await {
        Ok(Some(graph)) => graph,
        Ok(None) => return Ok(ErrorResponse::not_found("User not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };

    match storage.delete_user(user_id).await {
        Ok(true) => {
            info!("用户已删除: {} ({} 件商品一并删除)", user_id, graph.goods.len());
            Ok(HttpResponse::Ok().json(UserView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(false) => Ok(ErrorResponse::not_found("User not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
