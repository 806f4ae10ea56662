use async_trait::async_trait;

use crate::entities::service::Service;
use crate::errors::AppError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Loads the services catalog; a missing or unparsable file yields an
    /// empty list.
    async fn load_services(&self) -> Vec<Service>;

    /// Rewrites the whole catalog. Failures propagate.
    async fn save_services(&self, services: &[Service]) -> Result<(), AppError>;
}
