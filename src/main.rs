//! Service entry point for the attendance engine.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::PolicyLoader;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy_path = std::env::var("POLICY_PATH")
        .unwrap_or_else(|_| "./config/payroll/policy.yaml".to_string());
    let policy = PolicyLoader::load_or_default(&policy_path).expect("Failed to load payroll policy");
    tracing::info!(
        monthly_divisor = policy.monthly_divisor,
        "Payroll policy loaded"
    );

    let app = create_router(AppState::new(policy));

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("PORT must be a number");

    let addr = SocketAddr::new(host.parse().expect("Invalid HOST"), port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
