use std::{env, path::Path};

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{debug, info, warn};

use crate::{
    config::{self, Config, EnvFile, Environment},
    errors::AppError,
    middleware::RequestLogger,
    repositories::ShortUrlRegistry,
    routes, services,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> AppResult<()> {
    // Configure log level based on environment and config
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub async fn server() -> AppResult<()> {
    // Read .env before the configuration, report it once logging is up
    let env_file = config::load_env_file(env::var_os("ENV_FILE").as_deref().map(Path::new));

    // Load application configuration
    let config = Config::load()?;

    // Setup enhanced logging based on configuration
    setup_logging(&config)?;

    match env_file {
        EnvFile::Loaded(path) => debug!("Env file loaded from {}", path.display()),
        EnvFile::Missing(e) => warn!("Could not load env file: {}", e),
    }
    info!("Configuration loaded successfully");

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!("Short links are served under {}", config.app.base_url);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    let enable_request_logging = config.app.environment != Environment::Production;

    // One registry for the whole process, shared by every worker
    let service = services::register(&config);
    let app_config = web::Data::new(config.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(app_config.clone())
            .wrap(RequestLogger::new(enable_request_logging))
            .configure(routes::configure_routes::<ShortUrlRegistry>)
    })
    .workers(config.server.workers)
    .bind((config.server.host, config.server.port))?
    .run()
    .await?;

    Ok(())
}
