use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::services::payment_service::PaymentService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: SqlitePool,
    pub payment_service: Arc<PaymentService>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: SqlitePool, payment_service: Arc<PaymentService>) -> Self {
        AppState {
            config,
            db,
            payment_service,
        }
    }
}
