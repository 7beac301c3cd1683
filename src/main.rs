use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use contact_intake::{Config, ContactRepository, Database, SmtpMailer, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = contact_intake::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        contact_intake::logging::init_console_only(&config.logging.level);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> contact_intake::Result<()> {
    config.validate()?;

    info!("Contact intake service starting");

    let db = Database::open(&config.database.url).await?;
    info!("Connected to submission store at {}", config.database.url);

    let store = Arc::new(ContactRepository::new(db.pool().clone()));
    let mailer = Arc::new(SmtpMailer::new(&config.mail)?);

    let server = WebServer::new(&config, store, mailer)?;
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    server.run().await
}
