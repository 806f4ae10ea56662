use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    get, post, web, HttpResponse, Responder,
};

use crate::constants::ADMIN_TOKEN_COOKIE;
use crate::entities::token::LoginRequest;
use crate::handlers::json_error::handle_auth_error;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[post("/login")]
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> impl Responder {
    match state.auth_handler.login(request.into_inner()) {
        Ok(session) => {
            let cookie = Cookie::build(ADMIN_TOKEN_COOKIE, session.token)
                .path("/")
                .http_only(true)
                .secure(state.config.is_production())
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::hours(state.config.token_ttl_hours))
                .finish();

            HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
                "success": true,
                "message": "Logged in",
                "user": session.user
            }))
        }
        Err(e) => handle_auth_error(e),
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    // An empty value with max-age zero makes the browser drop the cookie.
    let cookie = Cookie::build(ADMIN_TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(state.config.is_production())
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::ZERO)
        .finish();

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "success": true,
        "message": "Logged out"
    }))
}

/// The SPA owns the actual login page; this route only exists so the admin
/// guard has somewhere to send unauthenticated requests.
#[get("/login")]
pub async fn admin_login_hint() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "POST credentials to /api/auth/login"
    }))
}

#[get("/dashboard")]
pub async fn admin_dashboard(admin: AdminClaims) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome, {}", admin.0.sub),
        "role": admin.0.role
    }))
}
