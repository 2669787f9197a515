use crate::models::users::entities::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Good {
    pub id: i64,
    pub good_name: String,
    // 对象存储中的公开地址
    pub image_url: String,
    // 价格（分）
    pub price: i64,
    pub seller_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 商品及其卖家
#[derive(Debug, Clone)]
pub struct GoodGraph {
    pub good: Good,
    pub seller: Option<User>,
}
