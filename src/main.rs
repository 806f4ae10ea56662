use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use resume_backend::{
    graceful_shutdown::shutdown_signal, middlewares::auth::AdminGuard,
    routes::configure_routes, settings::AppConfig, AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config));

    app_state
        .content
        .store
        .ensure_dirs()
        .await
        .expect("Failed to prepare data directory");

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {} (read_only: {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.read_only
    );

    let workers = config.worker_count;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AdminGuard)
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
