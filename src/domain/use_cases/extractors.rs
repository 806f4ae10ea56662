use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::constants::ADMIN_ROLE;
use crate::entities::token::Claims;
use crate::errors::AuthError;

/// Extractor for verified admin claims, inserted by the admin guard
/// middleware. Returns 401 when no claims are present and 403 when the
/// token does not carry the admin role.
/// Usage: add `admin: AdminClaims` as a handler parameter.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if claims.role == ADMIN_ROLE => ready(Ok(AdminClaims(claims.clone()))),
            Some(_) => ready(Err(AuthError::InvalidToken.into())),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
