// models/payment.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle of a payment record. Set to `Pending` at creation and moved
/// exactly once to one of the two terminal states by the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Success | PaymentStatus::Failed)
    }

    /// Parses a caller-supplied target status. Only the two terminal states
    /// are valid update targets; `PENDING` itself is not accepted.
    pub fn parse_update_target(value: &str) -> Option<PaymentStatus> {
        match value {
            "SUCCESS" => Some(PaymentStatus::Success),
            "FAILED" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub payment_uid: String,
    pub amount: f64,
    pub currency: String,
    pub sender_mobile: String,
    pub receiver_mobile: String,
    pub status: PaymentStatus,
}

/// Row contents for an insert, before the store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub payment_uid: String,
    pub amount: f64,
    pub currency: String,
    pub sender_mobile: String,
    pub receiver_mobile: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub amount: f64,
    #[validate(length(min = 1, message = "currency must not be empty"))]
    pub currency: String,
    #[validate(length(min = 4, message = "sender_mobile must be at least 4 characters"))]
    pub sender_mobile: String,
    #[validate(length(min = 4, message = "receiver_mobile must be at least 4 characters"))]
    pub receiver_mobile: String,
}

/// Target status for `PUT /payments/:payment_uid`. Kept as a raw string so
/// an unknown value maps to 400 in the service instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: i64,
    pub payment_uid: String,
    pub status: PaymentStatus,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        PaymentResponse {
            payment_id: payment.id,
            payment_uid: payment.payment_uid,
            status: payment.status,
        }
    }
}
