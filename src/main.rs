use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use peta_kemiskinan::{config, state::AppState, web};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_path = config::data_path();
    let model_path = config::model_path();

    // Everything is loaded once here; handlers only read.
    let state = Arc::new(AppState::load(&data_path, &model_path)?);

    web::server::serve(state, &config::static_dir(), config::bind_addr()).await?;
    Ok(())
}
