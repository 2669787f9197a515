pub mod create;
pub mod rate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::transactions::requests::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::storage::Storage;

pub struct TransactionService {
    storage: Option<Arc<dyn Storage>>,
}

impl TransactionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 记录交易
    pub async fn create_transaction(
        &self,
        transaction_data: CreateTransactionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_transaction(self, transaction_data, request).await
    }

    // 买家评分
    pub async fn rate_transaction(
        &self,
        transaction_id: i64,
        rating_data: UpdateTransactionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        rate::rate_transaction(self, transaction_id, rating_data, request).await
    }
}
