mod test_utils;

use actix_web::{
    cookie::Cookie,
    http::{header, StatusCode},
    middleware::NormalizePath,
    test, App,
};
use resume_backend::{
    constants::{ADMIN_LOGIN_PATH, ADMIN_TOKEN_COOKIE},
    middlewares::auth::AdminGuard,
    routes::configure_routes,
};
use serde_json::{json, Value};

use test_utils::{app_state, test_config};

macro_rules! spawn_app {
    ($dir:expr) => {
        test::init_service(
            App::new()
                .app_data(app_state(&test_config(
                    $dir.path(),
                    &$dir.path().join("uploads"),
                    false,
                )))
                .wrap(NormalizePath::trim())
                .wrap(AdminGuard)
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! login_cookie {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "admin", "password": "admin123" }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        resp.response()
            .cookies()
            .find(|c| c.name() == ADMIN_TOKEN_COOKIE)
            .expect("login must set the session cookie")
            .into_owned()
    }};
}

#[actix_rt::test]
async fn login_with_default_credentials_sets_the_session_cookie() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == ADMIN_TOKEN_COOKIE)
        .expect("session cookie")
        .into_owned();
    assert!(cookie.http_only().unwrap_or(false));
    assert!(!cookie.value().is_empty());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], json!("admin"));
    assert_eq!(body["user"]["role"], json!("admin"));
}

#[actix_rt::test]
async fn wrong_credentials_get_401_and_no_cookie() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    for (username, password) in [("admin", "nope"), ("root", "admin123")] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp
            .response()
            .cookies()
            .all(|c| c.name() != ADMIN_TOKEN_COOKIE));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
    }
}

#[actix_rt::test]
async fn blank_credentials_are_a_bad_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn logout_expires_the_session_cookie() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == ADMIN_TOKEN_COOKIE)
        .expect("removal cookie")
        .into_owned();
    assert!(cookie.value().is_empty());
    assert_eq!(
        cookie.max_age(),
        Some(actix_web::cookie::time::Duration::ZERO)
    );
}

#[actix_rt::test]
async fn guarded_route_without_cookie_redirects_to_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::get().uri("/admin/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        ADMIN_LOGIN_PATH
    );
}

#[actix_rt::test]
async fn guarded_route_with_garbage_cookie_redirects_to_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::get()
        .uri("/admin/dashboard")
        .cookie(Cookie::new(ADMIN_TOKEN_COOKIE, "not-a-signed-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        ADMIN_LOGIN_PATH
    );
}

#[actix_rt::test]
async fn guarded_route_admits_a_valid_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let cookie = login_cookie!(app);

    let req = test::TestRequest::get()
        .uri("/admin/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["role"], json!("admin"));
}

#[actix_rt::test]
async fn login_hint_route_is_reachable_without_a_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let req = test::TestRequest::get().uri("/admin/login").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn health_reports_missing_stores_on_a_fresh_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = spawn_app!(dir);

    let cookie = login_cookie!(app);

    let req = test::TestRequest::get()
        .uri("/admin/health")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["storage"]["resume"], json!("missing"));
    assert_eq!(body["storage"]["services"], json!("missing"));
}
