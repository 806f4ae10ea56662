use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use sysinfo::System;

use crate::constants::START_TIME;
use crate::repositories::json_store::StoreStatus;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to {}", state.config.name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Serialize)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
}

#[derive(Serialize)]
struct StorageStatus {
    resume: StoreStatus,
    services: StoreStatus,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    read_only: bool,
    storage: StorageStatus,
    system: SystemInfo,
}

#[get("/health")]
pub async fn admin_health_check(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let storage = StorageStatus {
        resume: state.content.store.resume_status().await,
        services: state.content.store.services_status().await,
    };

    // A missing file is normal (the store falls back to defaults); only an
    // unparsable one degrades the report.
    let status = if storage.resume == StoreStatus::Invalid
        || storage.services == StoreStatus::Invalid
    {
        "degraded"
    } else {
        "healthy"
    };

    let sys = System::new_all();
    let system = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: status.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        read_only: state.config.read_only,
        storage,
        system,
    })
}
