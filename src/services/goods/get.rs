use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GoodService;
use crate::models::{ErrorResponse, SerializeDepth, goods::responses::GoodView};

pub async fn get_good(
    service: &GoodService,
    good_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_good_graph(good_id).await {
        Ok(Some(graph)) => {
            Ok(HttpResponse::Ok().json(GoodView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(None) => Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
