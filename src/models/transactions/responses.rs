use serde::Serialize;

use super::entities::{Transaction, TransactionGraph};
use crate::models::{SerializeDepth, goods::responses::GoodView, users::responses::UserView};

// 交易视图
//
// - Simple: id, good_id, buyer_id, seller_id, amount, rating, timestamp
// - Public/Full: + good, buyer, seller（均为 Simple，已删除时为 null）
#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub id: i64,
    pub good_id: Option<i64>,
    pub buyer_id: Option<i64>,
    pub seller_id: Option<i64>,
    pub amount: i64,
    pub rating: Option<f64>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<Option<GoodView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Option<UserView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<Option<UserView>>,
}

impl TransactionView {
    pub fn simple(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            good_id: transaction.good_id,
            buyer_id: transaction.buyer_id,
            seller_id: transaction.seller_id,
            amount: transaction.amount,
            rating: transaction.rating,
            timestamp: transaction.timestamp,
            good: None,
            buyer: None,
            seller: None,
        }
    }

    pub fn from_graph(graph: &TransactionGraph, depth: SerializeDepth) -> Self {
        let mut view = Self::simple(&graph.transaction);
        if depth.includes_relations() {
            view.good = Some(graph.good.as_ref().map(GoodView::simple));
            view.buyer = Some(graph.buyer.as_ref().map(UserView::simple));
            view.seller = Some(graph.seller.as_ref().map(UserView::simple));
        }
        view
    }
}

// 交易列表响应
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionView>,
}
