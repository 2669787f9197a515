use crate::models::{
    courses::entities::Course, goods::entities::Good, transactions::entities::Transaction,
};

use super::rating::derived_rating;

// 用户（课程与市场共用）
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub netid: String,
    // 基础评分，展示值由交易评分推导
    pub rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 用户及其关联数据
#[derive(Debug, Clone)]
pub struct UserGraph {
    pub user: User,
    // 作为教师的课程
    pub instructing: Vec<Course>,
    // 作为学生的课程
    pub attending: Vec<Course>,
    // 在售商品
    pub goods: Vec<Good>,
    // 作为卖家的交易
    pub sales: Vec<Transaction>,
    // 作为买家的交易
    pub purchases: Vec<Transaction>,
}

impl UserGraph {
    /// 展示评分
    pub fn displayed_rating(&self) -> f64 {
        derived_rating(self.user.rating, self.sales.iter().map(|t| t.rating))
    }

    /// 交易历史，按 ID 排序，每笔交易只出现一次
    pub fn history(&self) -> Vec<&Transaction> {
        let mut history: Vec<&Transaction> =
            self.sales.iter().chain(self.purchases.iter()).collect();
        history.sort_by_key(|t| t.id);
        history.dedup_by_key(|t| t.id);
        history
    }
}
