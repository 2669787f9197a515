//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod goods;
mod system;
mod transactions;
mod users;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 基于已有连接创建存储实例并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, name: &str, netid: &str) -> Result<User> {
        self.create_user_impl(name, netid).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_netid(&self, netid: &str) -> Result<Option<User>> {
        self.get_user_by_netid_impl(netid).await
    }

    async fn update_user_name(&self, id: i64, name: &str) -> Result<Option<User>> {
        self.update_user_name_impl(id, name).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn get_user_graph(&self, id: i64) -> Result<Option<UserGraph>> {
        self.get_user_graph_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, code: &str, name: &str) -> Result<Course> {
        self.create_course_impl(code, name).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_course_graphs(&self) -> Result<Vec<CourseGraph>> {
        self.list_course_graphs_impl().await
    }

    async fn get_course_graph(&self, id: i64) -> Result<Option<CourseGraph>> {
        self.get_course_graph_impl(id).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn add_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        self.add_course_member_impl(course_id, user_id, role).await
    }

    // 作业模块
    async fn create_assignment_for_course(
        &self,
        course_id: i64,
        title: &str,
        due_date: i64,
    ) -> Result<Assignment> {
        self.create_assignment_for_course_impl(course_id, title, due_date)
            .await
    }

    async fn get_assignment_graph(&self, id: i64) -> Result<Option<AssignmentGraph>> {
        self.get_assignment_graph_impl(id).await
    }

    // 商品模块
    async fn create_good(
        &self,
        good_name: &str,
        image_url: &str,
        price: i64,
        seller_id: i64,
    ) -> Result<Good> {
        self.create_good_impl(good_name, image_url, price, seller_id)
            .await
    }

    async fn get_good_by_id(&self, id: i64) -> Result<Option<Good>> {
        self.get_good_by_id_impl(id).await
    }

    async fn list_good_graphs(&self) -> Result<Vec<GoodGraph>> {
        self.list_good_graphs_impl().await
    }

    async fn get_good_graph(&self, id: i64) -> Result<Option<GoodGraph>> {
        self.get_good_graph_impl(id).await
    }

    async fn update_good(&self, id: i64, update: UpdateGoodRequest) -> Result<Option<Good>> {
        self.update_good_impl(id, update).await
    }

    async fn delete_good(&self, id: i64) -> Result<bool> {
        self.delete_good_impl(id).await
    }

    // 交易模块
    async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        self.create_transaction_impl(transaction).await
    }

    async fn get_transaction_graph(&self, id: i64) -> Result<Option<TransactionGraph>> {
        self.get_transaction_graph_impl(id).await
    }

    async fn update_transaction_rating(
        &self,
        id: i64,
        rating: f64,
    ) -> Result<Option<Transaction>> {
        self.update_transaction_rating_impl(id, rating).await
    }

    // 系统模块
    async fn reset(&self) -> Result<()> {
        self.reset_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        SeaOrmStorage::from_connection(db).await.unwrap()
    }

    #[tokio::test]
    async fn test_delete_course_keeps_assignments() {
        let storage = memory_storage().await;
        let course = storage.create_course("CS 1998", "Backend").await.unwrap();
        let assignment = storage
            .create_assignment_for_course(course.id, "PA1", 1_700_000_000)
            .await
            .unwrap();

        assert!(storage.delete_course(course.id).await.unwrap());
        assert!(!storage.delete_course(course.id).await.unwrap());

        let graph = storage
            .get_assignment_graph(assignment.id)
            .await
            .unwrap()
            .unwrap();
        assert!(graph.courses.is_empty());
        assert!(graph.primary_course().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_netid_is_conflict() {
        let storage = memory_storage().await;
        storage.create_user("Alice", "ab123").await.unwrap();

        let err = storage.create_user("Bob", "ab123").await.unwrap_err();
        assert!(matches!(err, CampusError::Conflict(_)));
        assert_eq!(err.message(), "User already exists");
    }

    #[tokio::test]
    async fn test_member_add_is_idempotent() {
        let storage = memory_storage().await;
        let course = storage.create_course("CS 2110", "OOP").await.unwrap();
        let user = storage.create_user("Alice", "ab123").await.unwrap();

        assert!(
            storage
                .add_course_member(course.id, user.id, CourseRole::Student)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .add_course_member(course.id, user.id, CourseRole::Student)
                .await
                .unwrap()
        );

        let graph = storage.get_course_graph(course.id).await.unwrap().unwrap();
        assert_eq!(graph.students.len(), 1);
        assert!(graph.instructors.is_empty());
    }

    #[tokio::test]
    async fn test_deletes_keep_transactions() {
        let storage = memory_storage().await;
        let seller = storage.create_user("Seller", "se001").await.unwrap();
        let buyer = storage.create_user("Buyer", "bu001").await.unwrap();
        let good = storage
            .create_good("Lamp", "http://objects.test/A.png", 500, seller.id)
            .await
            .unwrap();
        let transaction = storage
            .create_transaction(NewTransaction {
                good_id: good.id,
                buyer_id: buyer.id,
                seller_id: seller.id,
                amount: 500,
                rating: Some(4.0),
            })
            .await
            .unwrap();

        assert!(storage.delete_user(seller.id).await.unwrap());
        assert!(storage.get_good_by_id(good.id).await.unwrap().is_none());

        let graph = storage
            .get_transaction_graph(transaction.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graph.transaction.good_id, None);
        assert_eq!(graph.transaction.seller_id, None);
        assert_eq!(graph.buyer.map(|u| u.id), Some(buyer.id));
        assert!(graph.seller.is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_tables() {
        let storage = memory_storage().await;
        storage.create_course("CS 1998", "Backend").await.unwrap();
        storage.create_user("Alice", "ab123").await.unwrap();

        storage.reset().await.unwrap();

        assert!(storage.list_course_graphs().await.unwrap().is_empty());
        assert!(storage.get_user_by_netid("ab123").await.unwrap().is_none());
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("campus.db").unwrap(),
            "sqlite://campus.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/campus").unwrap(),
            "postgres://u:p@localhost/campus"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
