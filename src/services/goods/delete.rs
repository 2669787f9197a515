use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GoodService;
use crate::models::{ErrorResponse, SerializeDepth, goods::responses::GoodView};

pub async fn delete_good(
    service: &GoodService,
    good_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let graph = match storage.get_good_graph(good_id).await {
        Ok(Some(graph)) => graph,
        Ok(None) => return Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };

    match storage.delete_good(good_id).await {
        Ok(true) => {
            info!("商品已删除: {}", good_id);
            Ok(HttpResponse::Ok().json(GoodView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(false) => Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
