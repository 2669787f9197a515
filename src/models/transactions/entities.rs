use crate::models::{goods::entities::Good, users::entities::User};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub good_id: Option<i64>,
    pub buyer_id: Option<i64>,
    pub seller_id: Option<i64>,
    // 成交金额（分）
    pub amount: i64,
    // 买家给卖家的评分，未评分为 None
    pub rating: Option<f64>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 交易及其关联的商品、买家、卖家
#[derive(Debug, Clone)]
pub struct TransactionGraph {
    pub transaction: Transaction,
    pub good: Option<Good>,
    pub buyer: Option<User>,
    pub seller: Option<User>,
}
