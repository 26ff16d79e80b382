use coachdesk_api::config::ApiConfig;
use coachdesk_store::create_store;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    coachdesk_api::init_tracing(config.log_level)?;

    // Create the record store client once for the whole process
    let store = create_store(config.store_backend.clone())
        .wrap_err("Failed to set up the record store")?;
    info!(
        schema = ?config.booking_schema,
        booked_table = %config.tables.booked,
        "Booking storage configured"
    );

    // Start API server
    coachdesk_api::start_server(config, store).await?;

    Ok(())
}
