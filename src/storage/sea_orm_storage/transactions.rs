use super::SeaOrmStorage;
use crate::entity::transactions::{ActiveModel, Entity as Transactions};
use crate::errors::{CampusError, Result};
use crate::models::transactions::{
    entities::{Transaction, TransactionGraph},
    requests::NewTransaction,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建交易
    pub async fn create_transaction_impl(&self, transaction: NewTransaction) -> Result<Transaction> {
        let model = ActiveModel {
            good_id: Set(Some(transaction.good_id)),
            buyer_id: Set(Some(transaction.buyer_id)),
            seller_id: Set(Some(transaction.seller_id)),
            amount: Set(transaction.amount),
            rating: Set(transaction.rating),
            timestamp: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建交易失败: {e}")))?;

        Ok(result.into_transaction())
    }

    /// 获取交易及其商品、买家、卖家
    pub async fn get_transaction_graph_impl(&self, id: i64) -> Result<Option<TransactionGraph>> {
        let Some(model) = Transactions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询交易失败: {e}")))?
        else {
            return Ok(None);
        };

        let transaction = model.into_transaction();

        let good = self
            .load_goods(transaction.good_id.into_iter().collect())
            .await?
            .pop();
        let mut parties = self
            .load_user_map(
                transaction
                    .buyer_id
                    .into_iter()
                    .chain(transaction.seller_id)
                    .collect(),
            )
            .await?;
        let buyer = transaction
            .buyer_id
            .and_then(|id| parties.get(&id).cloned());
        let seller = transaction.seller_id.and_then(|id| parties.remove(&id));

        Ok(Some(TransactionGraph {
            transaction,
            good,
            buyer,
            seller,
        }))
    }

    /// 更新交易评分
    pub async fn update_transaction_rating_impl(
        &self,
        id: i64,
        rating: f64,
    ) -> Result<Option<Transaction>> {
        let Some(existing) = Transactions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询交易失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.rating = Set(Some(rating));

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新交易评分失败: {e}")))?;

        Ok(Some(result.into_transaction()))
    }
}
