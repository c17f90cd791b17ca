use tokio::io::BufReader;
use tracing::{info, Instrument};

use users_ui::app_system::{setup_tracing, AppError, UiConfig, UsersSystem};
use users_ui::console::run_console;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = UiConfig::load_from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting users UI");

    let system = UsersSystem::new(&config);
    let initial = system.users_client.records().await?;
    info!(records = initial.len(), "Initial records loaded");

    let span = tracing::info_span!("console_session");
    let mut stdout = tokio::io::stdout();
    run_console(&system.users_client, BufReader::new(tokio::io::stdin()), &mut stdout)
        .instrument(span)
        .await?;

    let records = system.users_client.records().await?;
    info!(records = records.len(), "Console session ended");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
