use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use item_auth::config::{CorsConfig, EnvConfig};
use item_auth::db::DbService;
use item_auth::routes::configure_routes;
use std::sync::Arc;
use tracing::{error, info};

fn cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let db_service = Arc::new(
        DbService::new(&config.db_url, config.db_max_connections)
            .await
            .map_err(std::io::Error::other)?,
    );

    info!("Starting server on {}", addr);

    let app_db = Arc::clone(&db_service);
    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&app_db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await?;

    // workers have stopped; whatever handle remains closes on drop
    match Arc::try_unwrap(db_service) {
        Ok(db) => {
            if let Err(e) = db.close().await {
                error!("Failed to close database pool: {}", e);
            }
        }
        Err(_) => info!("Database pool released on drop"),
    }

    Ok(())
}
