pub mod auth;
pub mod json_error;
pub mod resume;
pub mod services;
pub mod system;
pub mod upload;
