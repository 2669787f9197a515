pub mod depth;
pub mod response;
pub mod serde_helpers;

pub use depth::SerializeDepth;
pub use response::{ErrorResponse, MessageResponse};
