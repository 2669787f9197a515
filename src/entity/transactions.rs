//! 交易实体
//!
//! 关联的商品、买家、卖家被删除后对应列置空，交易记录本身保留。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub good_id: Option<i64>,
    pub buyer_id: Option<i64>,
    pub seller_id: Option<i64>,
    pub amount: i64, // 单位：分
    pub rating: Option<f64>,
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::goods::Entity",
        from = "Column::GoodId",
        to = "super::goods::Column::Id"
    )]
    Good,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BuyerId",
        to = "super::users::Column::Id"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
}

impl Related<super::goods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Good.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_transaction(self) -> crate::models::transactions::entities::Transaction {
        use crate::models::transactions::entities::Transaction;
        use chrono::{DateTime, Utc};

        Transaction {
            id: self.id,
            good_id: self.good_id,
            buyer_id: self.buyer_id,
            seller_id: self.seller_id,
            amount: self.amount,
            rating: self.rating,
            timestamp: DateTime::<Utc>::from_timestamp(self.timestamp, 0).unwrap_or_default(),
        }
    }
}
