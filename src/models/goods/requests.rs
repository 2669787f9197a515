use serde::Deserialize;

use crate::models::common::serde_helpers::deserialize_optional_i64;

// 创建商品请求
//
// `image` 为 base64 data URI，例如 `data:image/png;base64,iVBOR...`
#[derive(Debug, Deserialize)]
pub struct CreateGoodRequest {
    pub good_name: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub seller_id: Option<i64>,
}

// 更新商品请求（名称与价格至少提供一项）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGoodRequest {
    pub good_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub price: Option<i64>,
}

impl UpdateGoodRequest {
    pub fn is_empty(&self) -> bool {
        self.good_name.is_none() && self.price.is_none()
    }
}
