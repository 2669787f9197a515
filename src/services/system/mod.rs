pub mod info;
pub mod reset;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 重置数据库
    pub async fn reset(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        reset::reset_database(self, request).await
    }

    // 服务运行信息
    pub async fn get_info(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        info::get_info(self, request).await
    }
}
