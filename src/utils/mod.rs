pub mod file_magic;
pub mod parameter_error_handler;
pub mod random_code;
pub mod validate;

pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::path_error_handler;
pub use random_code::generate_random_code;
