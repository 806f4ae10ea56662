use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::constants::{ADMIN_LOGIN_PATH, ADMIN_TOKEN_COOKIE};
use crate::AppState;

/// Guards every /admin route except the login page. The cookie's token is
/// fully verified here (signature and expiry) in a single check; there is no
/// weaker presence-only pre-check. Verified claims are handed to handlers
/// through request extensions.
pub struct AdminGuard;

impl<S> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminGuardService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !is_guarded_route(req.path()) {
                return service.call(req).await;
            }

            let state = match req.app_data::<web::Data<AppState>>() {
                Some(state) => state.clone(),
                None => {
                    tracing::error!("AppState missing in admin guard");
                    return Ok(redirect_to_login(req));
                }
            };

            let Some(cookie) = req.cookie(ADMIN_TOKEN_COOKIE) else {
                tracing::info!(path = %req.path(), "no session cookie, redirecting to login");
                return Ok(redirect_to_login(req));
            };

            match state.auth_handler.verify_token(cookie.value()) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!(path = %req.path(), "session token rejected: {}", e);
                    Ok(redirect_to_login(req))
                }
            }
        })
    }
}

fn is_guarded_route(path: &str) -> bool {
    path.starts_with("/admin") && !path.starts_with(ADMIN_LOGIN_PATH)
}

fn redirect_to_login(req: ServiceRequest) -> ServiceResponse<BoxBody> {
    let response = HttpResponse::Found()
        .insert_header((header::LOCATION, ADMIN_LOGIN_PATH))
        .finish();
    req.into_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_paths_are_guarded() {
        assert!(is_guarded_route("/admin"));
        assert!(is_guarded_route("/admin/dashboard"));
        assert!(is_guarded_route("/admin/health"));
        assert!(!is_guarded_route("/admin/login"));
        assert!(!is_guarded_route("/api/resume"));
        assert!(!is_guarded_route("/"));
    }
}
