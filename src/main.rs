use std::error::Error;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file when present; the server
    // runs fine on defaults without one.
    dotenvy::dotenv().ok();

    let filter = wiki_lookup::telemetry::env_filter_with_level("info", Level::INFO);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(wiki_lookup::telemetry::layer())
        .init();

    api::start().await?;

    Ok(())
}
