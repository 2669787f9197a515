//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//!
//! 多对多关系统一使用显式的关联实体（复合主键），
//! 级联规则在迁移中声明。

pub mod prelude;

pub mod assignments;
pub mod course_assignments;
pub mod course_instructors;
pub mod course_students;
pub mod courses;
pub mod goods;
pub mod transactions;
pub mod users;
