pub mod auth;
pub mod extract;
pub mod response;

pub use auth::{AdminUser, AuthUser, FreshAdminUser, RefreshUser};
pub use extract::{ApiPath, ValidJson};
pub use response::{ApiResponse, ApiResult};
