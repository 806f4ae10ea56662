use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};

use crate::constants::ADMIN_ROLE;
use crate::entities::token::Claims;
use crate::errors::AuthError;
use crate::repositories::token::TokenService;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::hours(config.token_ttl_hours),
        }
    }

    #[cfg(test)]
    fn with_expiration(config: &AppConfig, expiration: Duration) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration,
        }
    }

    pub fn create_admin_token(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp() as usize;

        let claims = Claims {
            sub: username.to_string(),
            role: ADMIN_ROLE.to_string(),
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_admin_token(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

impl TokenService for JwtService {
    fn create_admin_token(&self, username: &str) -> Result<String, AuthError> {
        self.create_admin_token(username)
    }

    fn decode_admin_token(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_admin_token(token)
    }
}
