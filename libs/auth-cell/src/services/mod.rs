pub mod admin;
pub mod password;

pub use admin::AdminAuthService;
pub use password::PasswordService;
