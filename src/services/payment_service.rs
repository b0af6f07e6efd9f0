// services/payment_service.rs
use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::database::payment_store::PaymentStore;
use crate::errors::{AppError, Result};
use crate::models::payment::{
    CreatePaymentRequest, NewPayment, Payment, PaymentStatus, UpdateStatusRequest,
};
use crate::services::uid::generate_payment_uid;

/// Orchestrates creation, lookup and the single status transition, keeping
/// the state machine and input checks out of the HTTP layer.
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn PaymentStore>) -> Self {
        PaymentService { store }
    }

    pub async fn create(&self, request: CreatePaymentRequest) -> Result<Payment> {
        request.validate()?;
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(AppError::ValidationError(
                "amount must be a positive number".to_string(),
            ));
        }

        let payment_uid = generate_payment_uid(&request.sender_mobile, &request.receiver_mobile);

        let payment = self
            .store
            .insert(NewPayment {
                payment_uid,
                amount: request.amount,
                currency: request.currency,
                sender_mobile: request.sender_mobile,
                receiver_mobile: request.receiver_mobile,
                status: PaymentStatus::Pending,
            })
            .await?;

        info!("created payment {}", payment.payment_uid);
        Ok(payment)
    }

    pub async fn get_by_uid(&self, payment_uid: &str) -> Result<Payment> {
        self.store
            .find_by_uid(payment_uid)
            .await?
            .ok_or(AppError::PaymentNotFound)
    }

    pub async fn update_status(
        &self,
        payment_uid: &str,
        request: UpdateStatusRequest,
    ) -> Result<Payment> {
        let target = PaymentStatus::parse_update_target(&request.status)
            .ok_or(AppError::InvalidStatusValue)?;

        let payment = self.store.update_status(payment_uid, target).await?;

        info!(
            "payment {} moved to {:?}",
            payment.payment_uid, payment.status
        );
        Ok(payment)
    }
}
