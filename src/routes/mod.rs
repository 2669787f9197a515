//! 路由定义
//!
//! 路径不带结尾斜杠，`/api/users/1/` 与 `/api/users/1` 由 NormalizePath 统一。

pub mod courses;

pub mod users;

pub mod goods;

pub mod transactions;

pub mod system;

use actix_web::web;

pub use courses::configure_course_routes;
pub use goods::configure_good_routes;
pub use system::configure_system_routes;
pub use transactions::configure_transaction_routes;
pub use users::configure_user_routes;

// 注册全部 API 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_course_routes)
        .configure(configure_user_routes)
        .configure(configure_good_routes)
        .configure(configure_transaction_routes);
}
