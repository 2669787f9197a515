use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GoodService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    goods::responses::{GoodListResponse, GoodView},
};

pub async fn list_goods(service: &GoodService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_good_graphs().await {
        Ok(graphs) => Ok(HttpResponse::Ok().json(GoodListResponse {
            goods: graphs
                .iter()
                .map(|g| GoodView::from_graph(g, SerializeDepth::Full))
                .collect(),
        })),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
