pub mod courses;
pub mod goods;
pub mod system;
pub mod transactions;
pub mod users;

pub use courses::CourseService;
pub use goods::GoodService;
pub use system::SystemService;
pub use transactions::TransactionService;
pub use users::UserService;
