use validator::Validate;

use crate::constants::ADMIN_ROLE;
use crate::entities::token::{AuthUser, Claims, LoginRequest, LoginSession};
use crate::errors::AuthError;
use crate::repositories::token::TokenService;
use crate::settings::AdminCredentials;

pub struct AuthHandler<T>
where
    T: TokenService,
{
    credentials: AdminCredentials,
    pub token_service: T,
}

impl<T> AuthHandler<T>
where
    T: TokenService,
{
    pub fn new(credentials: AdminCredentials, token_service: T) -> Self {
        AuthHandler {
            credentials,
            token_service,
        }
    }

    /// Checks the supplied pair against the configured credentials and mints
    /// a session token. A wrong username and a wrong password are
    /// indistinguishable to the caller.
    pub fn login(&self, request: LoginRequest) -> Result<LoginSession, AuthError> {
        request.validate()?;

        if request.username != self.credentials.username
            || request.password != self.credentials.password
        {
            tracing::warn!("rejected admin login attempt");
            return Err(AuthError::WrongCredentials);
        }

        let token = self.token_service.create_admin_token(&request.username)?;

        tracing::info!(username = %request.username, "admin logged in");
        Ok(LoginSession {
            token,
            user: AuthUser {
                username: request.username,
                role: ADMIN_ROLE.to_string(),
            },
        })
    }

    /// Full verification of a session token: signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.token_service.decode_admin_token(token)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::TokenData;

    struct StubTokens;

    impl TokenService for StubTokens {
        fn create_admin_token(&self, _username: &str) -> Result<String, AuthError> {
            Ok("stub-token".into())
        }

        fn decode_admin_token(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
            if token == "stub-token" {
                Ok(TokenData {
                    header: Default::default(),
                    claims: Claims {
                        sub: "admin".into(),
                        role: ADMIN_ROLE.into(),
                        exp: 0,
                        iat: 0,
                    },
                })
            } else {
                Err(AuthError::InvalidToken)
            }
        }
    }

    fn handler() -> AuthHandler<StubTokens> {
        AuthHandler::new(
            AdminCredentials {
                username: "admin".into(),
                password: "admin123".into(),
            },
            StubTokens,
        )
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn valid_pair_yields_a_session() {
        let session = handler().login(request("admin", "admin123")).expect("login");
        assert_eq!(session.token, "stub-token");
        assert_eq!(session.user.username, "admin");
        assert_eq!(session.user.role, ADMIN_ROLE);
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let wrong_password = handler().login(request("admin", "nope")).unwrap_err();
        let unknown_user = handler().login(request("root", "admin123")).unwrap_err();

        assert!(matches!(wrong_password, AuthError::WrongCredentials));
        assert!(matches!(unknown_user, AuthError::WrongCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn blank_fields_fail_validation_before_comparison() {
        assert!(matches!(
            handler().login(request("", "admin123")),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            handler().login(request("admin", "")),
            Err(AuthError::MissingCredentials)
        ));
    }
}
