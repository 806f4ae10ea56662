use actix_web::web;

use crate::handlers::{
    auth::{admin_dashboard, admin_login_hint, login, logout},
    resume::{get_resume, update_resume},
    services::{create_service, delete_service, list_services},
    system::{admin_health_check, home},
    upload::upload_photo,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/admin")
            .service(admin_login_hint)
            .service(admin_dashboard)
            .service(admin_health_check),
    );

    cfg.service(
        web::scope("/api")
            .service(web::scope("/auth").service(login).service(logout))
            .service(get_resume)
            .service(update_resume)
            .service(list_services)
            .service(create_service)
            .service(delete_service)
            .service(upload_photo),
    );
}
