use serde::{Deserialize, Serialize};
use validator::Validate;

/// One entry of the services catalog, stored as a flat JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Service {
    #[validate(length(min = 1, message = "Service id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Service title cannot be empty"))]
    pub title: String,

    pub description: String,

    /// Displayed verbatim, e.g. "from $500".
    pub price: String,

    /// Displayed verbatim, e.g. "2-3 weeks".
    pub duration: String,

    pub features: Vec<String>,
    pub category: String,
    pub icon: String,
}
