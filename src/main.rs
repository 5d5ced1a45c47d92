use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use scriptdoctor::{config::Config, routes, state::AppState};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();
    let payload_limit = config.max_payload_bytes;

    info!("Script analysis service listening on http://{bind_addr}");
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );
    info!("Max payload: {payload_limit} bytes");
    info!("Routes: GET /status, POST /analyze, POST /autocomplete");

    let workers = config.workers;
    let state = Arc::new(AppState { config });

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .app_data(routes::json_config(payload_limit))
            .wrap(Logger::default())
            .configure(routes::configure)
    });

    if let Some(workers) = workers {
        info!("Workers: {workers}");
        server = server.workers(workers);
    }

    server.bind(bind_addr)?.run().await
}
