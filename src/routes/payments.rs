use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::payment_handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", post(payment_handlers::create_payment))
        .route(
            "/payments/:payment_uid",
            get(payment_handlers::get_payment_by_uid).put(payment_handlers::update_payment_status),
        )
}
