use serde::{Deserialize, Serialize};
use validator::Validate;

/// Claims embedded in the signed admin session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

/// A successful login: the signed token plus the identity it asserts.
/// The HTTP layer turns the token into the session cookie.
#[derive(Debug)]
pub struct LoginSession {
    pub token: String,
    pub user: AuthUser,
}
