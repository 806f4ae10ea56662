mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use auth::jwt::JwtService;
use repositories::json_store::JsonStore;
use use_cases::{auth::AuthHandler, content::ContentHandler};

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub content: AppContentHandler,
    pub config: settings::AppConfig,
}

pub type AppAuthHandler = AuthHandler<JwtService>;
pub type AppContentHandler = ContentHandler<JsonStore>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let jwt_service = JwtService::new(config);
        let auth_handler = AuthHandler::new(config.credentials(), jwt_service);
        let store = JsonStore::new(&config.data_dir);
        let content = ContentHandler::new(store, config.read_only);

        AppState {
            auth_handler,
            content,
            config: config.clone(),
        }
    }
}
