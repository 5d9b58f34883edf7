use iss_watch::config;
use iss_watch::logging;
use iss_watch::service::CheckService;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let dotenv_path = match config::load_dotenv() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("iss-watch: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    let config = match config::read_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("iss-watch: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    // Initialize logging
    let _logging_guard = match logging::init_logging(&config.log_dir, "iss-watch", &config.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("iss-watch: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("ISS watch starting...");
    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let service = match CheckService::new(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    tracing::debug!("Using ISS endpoint {}, sun endpoint {}", service.config().iss_url, service.config().sun_url);

    match service.check().await {
        Ok(evaluation) => {
            println!("{}", evaluation.outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("ISS check failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
