use super::SeaOrmStorage;
use crate::entity::{
    goods::{ActiveModel, Column, Entity as Goods, Model as GoodModel},
    transactions,
};
use crate::errors::{CampusError, Result};
use crate::models::goods::{
    entities::{Good, GoodGraph},
    requests::UpdateGoodRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
    sea_query::{Expr, Value},
};

impl SeaOrmStorage {
    /// 创建商品
    pub async fn create_good_impl(
        &self,
        good_name: &str,
        image_url: &str,
        price: i64,
        seller_id: i64,
    ) -> Result<Good> {
        let model = ActiveModel {
            good_name: Set(good_name.to_string()),
            image_url: Set(image_url.to_string()),
            price: Set(price),
            seller_id: Set(seller_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建商品失败: {e}")))?;

        Ok(result.into_good())
    }

    /// 通过 ID 获取商品
    pub async fn get_good_by_id_impl(&self, id: i64) -> Result<Option<Good>> {
        let result = Goods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询商品失败: {e}")))?;

        Ok(result.map(|m| m.into_good()))
    }

    /// 列出所有商品及其卖家
    pub async fn list_good_graphs_impl(&self) -> Result<Vec<GoodGraph>> {
        let goods = Goods::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询商品列表失败: {e}")))?;

        self.assemble_good_graphs(goods).await
    }

    /// 获取商品及其卖家
    pub async fn get_good_graph_impl(&self, id: i64) -> Result<Option<GoodGraph>> {
        let Some(good) = Goods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询商品失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self.assemble_good_graphs(vec![good]).await?.pop())
    }

    /// 更新商品名称或价格
    pub async fn update_good_impl(&self, id: i64, update: UpdateGoodRequest) -> Result<Option<Good>> {
        let Some(existing) = Goods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询商品失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(good_name) = update.good_name {
            model.good_name = Set(good_name);
        }
        if let Some(price) = update.price {
            model.price = Set(price);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新商品失败: {e}")))?;

        Ok(Some(result.into_good()))
    }

    /// 删除商品，相关交易的商品引用置空
    pub async fn delete_good_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启事务失败: {e}")))?;

        let deleted: std::result::Result<u64, DbErr> = async {
            transactions::Entity::update_many()
                .col_expr(transactions::Column::GoodId, Expr::value(Value::BigInt(None)))
                .filter(transactions::Column::GoodId.eq(id))
                .exec(&txn)
                .await?;

            let result = Goods::delete_by_id(id).exec(&txn).await?;
            Ok(result.rows_affected)
        }
        .await;

        match deleted {
            Ok(rows) => {
                txn.commit()
                    .await
                    .map_err(|e| CampusError::database_operation(format!("提交事务失败: {e}")))?;
                Ok(rows > 0)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(CampusError::database_operation(format!("删除商品失败: {e}")))
            }
        }
    }

    /// 批量加载商品
    pub(super) async fn load_goods(&self, ids: Vec<i64>) -> Result<Vec<Good>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let goods = Goods::find()
            .filter(Column::Id.is_in(ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量查询商品失败: {e}")))?;

        Ok(goods.into_iter().map(|m| m.into_good()).collect())
    }

    async fn assemble_good_graphs(&self, goods: Vec<GoodModel>) -> Result<Vec<GoodGraph>> {
        let mut seller_ids: Vec<i64> = goods.iter().map(|g| g.seller_id).collect();
        seller_ids.sort_unstable();
        seller_ids.dedup();
        let sellers = self.load_user_map(seller_ids).await?;

        Ok(goods
            .into_iter()
            .map(|good| GoodGraph {
                seller: sellers.get(&good.seller_id).cloned(),
                good: good.into_good(),
            })
            .collect())
    }
}
