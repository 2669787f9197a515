use std::sync::Arc;

use crate::models::{
    assignments::entities::{Assignment, AssignmentGraph},
    courses::entities::{Course, CourseGraph, CourseRole},
    goods::{
        entities::{Good, GoodGraph},
        requests::UpdateGoodRequest,
    },
    transactions::{
        entities::{Transaction, TransactionGraph},
        requests::NewTransaction,
    },
    users::entities::{User, UserGraph},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（netid 重复时返回 Conflict）
    async fn create_user(&self, name: &str, netid: &str) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过 netid 获取用户信息
    async fn get_user_by_netid(&self, netid: &str) -> Result<Option<User>>;
    // 更新用户姓名
    async fn update_user_name(&self, id: i64, name: &str) -> Result<Option<User>>;
    // 删除用户（级联删除其商品）
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 获取用户及其课程、商品、交易
    async fn get_user_graph(&self, id: i64) -> Result<Option<UserGraph>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, code: &str, name: &str) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出全部课程及其关联
    async fn list_course_graphs(&self) -> Result<Vec<CourseGraph>>;
    // 获取课程及其关联
    async fn get_course_graph(&self, id: i64) -> Result<Option<CourseGraph>>;
    // 删除课程（仅删除关联行，作业保留）
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 添加课程成员，已存在时返回 false
    async fn add_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool>;

    /// 作业管理方法
    // 创建作业并挂到课程下
    async fn create_assignment_for_course(
        &self,
        course_id: i64,
        title: &str,
        due_date: i64,
    ) -> Result<Assignment>;
    // 获取作业及其所属课程
    async fn get_assignment_graph(&self, id: i64) -> Result<Option<AssignmentGraph>>;

    /// 商品管理方法
    // 创建商品
    async fn create_good(
        &self,
        good_name: &str,
        image_url: &str,
        price: i64,
        seller_id: i64,
    ) -> Result<Good>;
    // 通过ID获取商品
    async fn get_good_by_id(&self, id: i64) -> Result<Option<Good>>;
    // 列出全部商品及卖家
    async fn list_good_graphs(&self) -> Result<Vec<GoodGraph>>;
    // 获取商品及卖家
    async fn get_good_graph(&self, id: i64) -> Result<Option<GoodGraph>>;
    // 更新商品名称或价格
    async fn update_good(&self, id: i64, update: UpdateGoodRequest) -> Result<Option<Good>>;
    // 删除商品
    async fn delete_good(&self, id: i64) -> Result<bool>;

    /// 交易管理方法
    // 创建交易
    async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction>;
    // 获取交易及其关联
    async fn get_transaction_graph(&self, id: i64) -> Result<Option<TransactionGraph>>;
    // 更新交易评分
    async fn update_transaction_rating(
        &self,
        id: i64,
        rating: f64,
    ) -> Result<Option<Transaction>>;

    /// 系统方法
    // 清空并重建全部数据表
    async fn reset(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
