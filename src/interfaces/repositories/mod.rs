pub mod json_store;
pub mod resume;
pub mod services;
pub mod token;
