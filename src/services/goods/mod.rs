pub mod create;
pub mod delete;
pub mod get;
pub mod image;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::goods::requests::{CreateGoodRequest, UpdateGoodRequest};
use crate::object_store::ObjectStore;
use crate::storage::Storage;

pub struct GoodService {
    storage: Option<Arc<dyn Storage>>,
}

impl GoodService {
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

    pub(crate) fn get_object_store(&self, request: &HttpRequest) -> Arc<dyn ObjectStore> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectStore>>>()
            .expect("Object store not found in app data")
            .get_ref()
            .clone()
    }

    // 发布商品
    pub async fn create_good(
        &self,
        good_data: CreateGoodRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_good(self, good_data, request).await
    }

    // 获取全部商品
    pub async fn list_goods(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_goods(self, request).await
    }

    // 根据ID获取商品
    pub async fn get_good(&self, good_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_good(self, good_id, request).await
    }

    // 更新商品名称或价格
    pub async fn update_good(
        &self,
        good_id: i64,
        update_data: UpdateGoodRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_good(self, good_id, update_data, request).await
    }

    // 删除商品
    pub async fn delete_good(
        &self,
        good_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_good(self, good_id, request).await
    }
}
