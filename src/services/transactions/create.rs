use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TransactionService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    transactions::{
        requests::{CreateTransactionRequest, NewTransaction},
        responses::TransactionView,
    },
};
use crate::utils::validate::{validate_amount, validate_rating};

pub async fn create_transaction(
    service: &TransactionService,
    transaction_data: CreateTransactionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(amount), Some(good_id), Some(buyer_id), Some(seller_id)) = (
        transaction_data.amount,
        transaction_data.good_id,
        transaction_data.buyer_id,
        transaction_data.seller_id,
    ) else {
        return Ok(ErrorResponse::bad_request("Incomplete transaction information"));
    };

    if let Err(e) = validate_amount(amount) {
        return Ok(ErrorResponse::from_error(&e));
    }
    if let Some(rating) = transaction_data.rating
        && let Err(e) = validate_rating(rating)
    {
        return Ok(ErrorResponse::from_error(&e));
    }

    let storage = service.get_storage(request);

    match storage.get_good_by_id(good_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Good not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }
    match storage.get_user_by_id(buyer_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Buyer not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }
    match storage.get_user_by_id(seller_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Seller not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    let transaction = match storage
        .create_transaction(NewTransaction {
            good_id,
            buyer_id,
            seller_id,
            amount,
            rating: transaction_data.rating,
        })
        .await
    {
        Ok(transaction) => transaction,
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };
    info!(
        "交易已记录: {} (商品 {}, 买家 {}, 卖家 {})",
        transaction.id, good_id, buyer_id, seller_id
    );

    match storage.get_transaction_graph(transaction.id).await {
        Ok(Some(graph)) => Ok(HttpResponse::Created()
            .json(TransactionView::from_graph(&graph, SerializeDepth::Full))),
        Ok(None) => Ok(ErrorResponse::not_found("Transaction not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
