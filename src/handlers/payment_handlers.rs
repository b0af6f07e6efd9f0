// handlers/payment_handlers.rs
use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::Result;
use crate::models::payment::{CreatePaymentRequest, PaymentResponse, UpdateStatusRequest};
use crate::state::AppState;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    let payment = state.payment_service.create(request).await?;
    Ok(Json(payment.into()))
}

pub async fn get_payment_by_uid(
    State(state): State<AppState>,
    Path(payment_uid): Path<String>,
) -> Result<Json<PaymentResponse>> {
    let payment = state.payment_service.get_by_uid(&payment_uid).await?;
    Ok(Json(payment.into()))
}

pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(payment_uid): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<PaymentResponse>> {
    let payment = state
        .payment_service
        .update_status(&payment_uid, request)
        .await?;
    Ok(Json(payment.into()))
}
