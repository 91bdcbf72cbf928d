use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};

mod config;
mod handlers;
mod models;
mod services;

use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    log::info!("Starting server at {}:{}", config.host, config.port);

    match config.demo_page_path {
        Some(ref path) => log::info!("Serving demo page from: {}", path),
        None => log::info!("Serving built-in sample page"),
    }
    if let Some(ref path) = config.static_files_path {
        log::info!("Serving frontend package from: {}/pkg", path);
    }

    let app_state = web::Data::new(models::AppState {
        config: config.clone(),
    });
    let static_files_path = config.static_files_path.clone();

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(handlers::configure_routes);

        if let Some(ref path) = static_files_path {
            app = app.service(Files::new("/pkg", format!("{}/pkg", path)));
        }

        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
