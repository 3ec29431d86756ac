use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use studyquiz_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate_for_production() {
        log::error!("Invalid configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    let state = AppState::new(config.clone())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let shutdown = state.shutdown.clone();
    let data = web::Data::new(state);

    log::info!(
        "starting HTTP server on {}:{} (model {})",
        config.web_server_host,
        config.web_server_port,
        config.gemini_model
    );

    let allowed_origin = config.cors_allowed_origin.clone();
    let result = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
            .max_age(3600);

        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await;

    // Abandon any generation still waiting on the model.
    shutdown.cancel();
    log::info!("server stopped");
    result
}
