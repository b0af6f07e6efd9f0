use std::net::SocketAddr;
use std::sync::Arc;

use payment_api::config::AppConfig;
use payment_api::database::connection::init_pool;
use payment_api::database::payment_store::SqlitePaymentStore;
use payment_api::services::payment_service::PaymentService;
use payment_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Arc::new(AppConfig::from_env()?);

    let db = init_pool(&config.database_url).await?;
    let store = Arc::new(SqlitePaymentStore::new(db.clone()));
    let payment_service = Arc::new(PaymentService::new(store));

    let app_state = AppState::new(config.clone(), db, payment_service);
    let app = payment_api::build_router(app_state);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!("🚀 Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
