use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use vulnboard_server::auth::handlers::login;
use vulnboard_server::{comments, cowsay, health_check, AppError, AppState, Settings, Store};

#[actix_web::main]
async fn main() -> vulnboard_server::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();

    // Load configuration
    let config = Settings::new()?;
    info!("Configuration loaded successfully");

    info!("Starting server at {}:{}", config.server.host, config.server.port);

    // Initialize application state
    let state = AppState::new(config.clone()).await?;

    // Bootstrap schema and demo data, mirroring the original training app
    if config.database.run_setup {
        state.store.setup().await?;
    }

    let state = web::Data::new(state);

    // Create and bind TCP listener
    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;

    // Start HTTP server
    HttpServer::new(move || {
        // This is a deliberately vulnerable demo app; CORS is wide open.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .route("/login", web::post().to(login))
            .route("/comments", web::get().to(comments::handlers::list))
            .route("/comments", web::post().to(comments::handlers::create))
            .route("/comments/{id}", web::delete().to(comments::handlers::delete))
            .route("/cowsay", web::get().to(cowsay::handlers::render))
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
