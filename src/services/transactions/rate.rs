use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TransactionService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    transactions::{requests::UpdateTransactionRequest, responses::TransactionView},
};
use crate::utils::validate::validate_rating;

pub async fn rate_transaction(
    service: &TransactionService,
    transaction_id: i64,
    rating_data: UpdateTransactionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(rating) = rating_data.rating else {
        return Ok(ErrorResponse::bad_request("No rating value given"));
    };
    if let Err(e) = validate_rating(rating) {
        return Ok(ErrorResponse::from_error(&e));
    }

    let storage = service.get_storage(request);

    match storage
        .update_transaction_rating(transaction_id, rating)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Transaction not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    match storage.get_transaction_graph(transaction_id).await {
        Ok(Some(graph)) => Ok(HttpResponse::Ok()
            .json(TransactionView::from_graph(&graph, SerializeDepth::Full))),
        Ok(None) => Ok(ErrorResponse::not_found("Transaction not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
