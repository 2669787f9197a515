use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GoodService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    goods::{requests::UpdateGoodRequest, responses::GoodView},
};
use crate::utils::validate::{validate_name, validate_price};

pub async fn update_good(
    service: &GoodService,
    good_id: i64,
    mut update_data: UpdateGoodRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_good_by_id(good_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    if update_data.is_empty() {
        return Ok(ErrorResponse::bad_request("Incomplete good information"));
    }
    if let Some(name) = update_data.good_name.as_mut() {
        if let Err(e) = validate_name(name) {
            return Ok(ErrorResponse::from_error(&e));
        }
        *name = name.trim().to_string();
    }
    if let Some(price) = update_data.price
        && let Err(e) = validate_price(price)
    {
        return Ok(ErrorResponse::from_error(&e));
    }

    match storage.update_good(good_id, update_data).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    match storage.get_good_graph(good_id).await {
        Ok(Some(graph)) => {
            Ok(HttpResponse::Ok().json(GoodView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(None) => Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
