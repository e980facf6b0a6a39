//! Development server for UI work
//!
//! Runs the mock authentication, workout catalog and booking services on a
//! single origin, seeded with a week of workouts and a demo account.
//!
//! Usage: cargo run -p dev-server
//!
//! `IP_ADDRESS`, `PORT` and `ALLOWED_ORIGINS` are read from the environment
//! or a `.env` file.

use anyhow::Result;
use mock_services::{Config, telemetry};
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting development services");

    let config = Config::from_env()?;
    let app = test_helpers::spawn_app_with_config(config).await;
    let address = app.address();

    info!("✅ Services running on {address}");

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: {address}/api");
    info!(
        "   UI:  cd ui && AUTH_SERVICE_URL={address} WORKOUT_SERVICE_URL={address} BOOKING_SERVICE_URL={address} trunk serve"
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
