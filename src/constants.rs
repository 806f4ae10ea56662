use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Session cookie carrying the signed admin token.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

pub const ADMIN_ROLE: &str = "admin";

/// Where the admin guard sends unauthenticated requests.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

pub const RESUME_FILE: &str = "resume.json";
pub const SERVICES_FILE: &str = "services.json";

/// Upload ceiling for profile photos.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Fixed response body for write endpoints on a read-only deployment.
pub const WRITES_DISABLED_MESSAGE: &str =
    "Content editing is disabled on this deployment. Use a local environment to make changes.";
