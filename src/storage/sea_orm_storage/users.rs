use super::SeaOrmStorage;
use crate::entity::{
    course_instructors, course_students, goods,
    transactions,
    users::{ActiveModel, Column, Entity as Users},
};
use crate::errors::{CampusError, Result};
use crate::models::users::entities::{User, UserGraph};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
    TransactionTrait,
    sea_query::{Expr, Value},
};
use std::collections::HashMap;

/// 新用户的基础评分
pub const DEFAULT_RATING: f64 = 5.0;

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, name: &str, netid: &str) -> Result<User> {
        if self.get_user_by_netid_impl(netid).await?.is_some() {
            return Err(CampusError::conflict("User already exists"));
        }

        let model = ActiveModel {
            name: Set(name.to_string()),
            netid: Set(netid.to_string()),
            rating: Set(DEFAULT_RATING),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        // 并发创建时由唯一索引兜底
        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CampusError::conflict("User already exists")
            }
            _ => CampusError::database_operation(format!("创建用户失败: {e}")),
        })?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过 netid 获取用户
    pub async fn get_user_by_netid_impl(&self, netid: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Netid.eq(netid))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新用户姓名
    pub async fn update_user_name_impl(&self, id: i64, name: &str) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.name = Set(name.to_string());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(result.into_user()))
    }

    /// 删除用户
    ///
    /// 同时删除其商品与课程成员关系，交易中的买家/卖家引用置空。
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启事务失败: {e}")))?;

        let deleted: std::result::Result<u64, DbErr> = async {
            transactions::Entity::update_many()
                .col_expr(transactions::Column::BuyerId, Expr::value(Value::BigInt(None)))
                .filter(transactions::Column::BuyerId.eq(id))
                .exec(&txn)
                .await?;
            transactions::Entity::update_many()
                .col_expr(transactions::Column::SellerId, Expr::value(Value::BigInt(None)))
                .filter(transactions::Column::SellerId.eq(id))
                .exec(&txn)
                .await?;

            // 被删除商品上的交易保留，商品引用置空
            let good_ids: Vec<i64> = goods::Entity::find()
                .filter(goods::Column::SellerId.eq(id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|g| g.id)
                .collect();
            if !good_ids.is_empty() {
                transactions::Entity::update_many()
                    .col_expr(transactions::Column::GoodId, Expr::value(Value::BigInt(None)))
                    .filter(transactions::Column::GoodId.is_in(good_ids))
                    .exec(&txn)
                    .await?;
            }
            goods::Entity::delete_many()
                .filter(goods::Column::SellerId.eq(id))
                .exec(&txn)
                .await?;

            course_instructors::Entity::delete_many()
                .filter(course_instructors::Column::UserId.eq(id))
                .exec(&txn)
                .await?;
            course_students::Entity::delete_many()
                .filter(course_students::Column::UserId.eq(id))
                .exec(&txn)
                .await?;

            let result = Users::delete_by_id(id).exec(&txn).await?;
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
                Err(CampusError::database_operation(format!("删除用户失败: {e}")))
            }
        }
    }

    /// 获取用户及其课程、商品、交易
    pub async fn get_user_graph_impl(&self, id: i64) -> Result<Option<UserGraph>> {
        let Some(user) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let instructing_ids: Vec<i64> = course_instructors::Entity::find()
            .filter(course_instructors::Column::UserId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询授课课程失败: {e}")))?
            .into_iter()
            .map(|m| m.course_id)
            .collect();
        let attending_ids: Vec<i64> = course_students::Entity::find()
            .filter(course_students::Column::UserId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选修课程失败: {e}")))?
            .into_iter()
            .map(|m| m.course_id)
            .collect();

        let instructing = self.load_courses(instructing_ids).await?;
        let attending = self.load_courses(attending_ids).await?;

        let goods = goods::Entity::find()
            .filter(goods::Column::SellerId.eq(id))
            .order_by_asc(goods::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询用户商品失败: {e}")))?
            .into_iter()
            .map(|m| m.into_good())
            .collect();

        let sales = transactions::Entity::find()
            .filter(transactions::Column::SellerId.eq(id))
            .order_by_asc(transactions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询卖出交易失败: {e}")))?
            .into_iter()
            .map(|m| m.into_transaction())
            .collect();
        let purchases = transactions::Entity::find()
            .filter(transactions::Column::BuyerId.eq(id))
            .order_by_asc(transactions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询买入交易失败: {e}")))?
            .into_iter()
            .map(|m| m.into_transaction())
            .collect();

        Ok(Some(UserGraph {
            user,
            instructing,
            attending,
            goods,
            sales,
            purchases,
        }))
    }

    /// 批量加载用户，按 ID 升序
    pub(super) async fn load_users(&self, ids: Vec<i64>) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Users::find()
            .filter(Column::Id.is_in(ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量查询用户失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 批量加载用户，以 ID 为键
    pub(super) async fn load_user_map(&self, ids: Vec<i64>) -> Result<HashMap<i64, User>> {
        Ok(self
            .load_users(ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }
}
