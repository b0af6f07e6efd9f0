// database/payment_store.rs
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::errors::{AppError, Result};
use crate::models::payment::{NewPayment, Payment, PaymentStatus};

/// Persistence over payment records, keyed by `payment_uid`. Any relational
/// or embedded engine can sit behind this; the shipped implementation is
/// SQLite via sqlx.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Persists a new record and returns it with the store-assigned `id`.
    /// Fails with `DuplicatePaymentUid` when `payment_uid` already exists.
    async fn insert(&self, new_payment: NewPayment) -> Result<Payment>;

    /// Exact-match lookup on `payment_uid`.
    async fn find_by_uid(&self, payment_uid: &str) -> Result<Option<Payment>>;

    /// Moves a record out of `PENDING` into the given terminal status.
    /// The transition predicate lives in the UPDATE itself, so two racing
    /// calls cannot both win; the loser sees `StatusAlreadyFinal`.
    async fn update_status(&self, payment_uid: &str, status: PaymentStatus) -> Result<Payment>;
}

pub struct SqlitePaymentStore {
    pool: SqlitePool,
}

impl SqlitePaymentStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePaymentStore { pool }
    }
}

#[async_trait]
impl PaymentStore for SqlitePaymentStore {
    async fn insert(&self, new_payment: NewPayment) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (payment_uid, amount, currency, sender_mobile, receiver_mobile, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, payment_uid, amount, currency, sender_mobile, receiver_mobile, status
            "#,
        )
        .bind(&new_payment.payment_uid)
        .bind(new_payment.amount)
        .bind(&new_payment.currency)
        .bind(&new_payment.sender_mobile)
        .bind(&new_payment.receiver_mobile)
        .bind(new_payment.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicatePaymentUid
            }
            _ => AppError::Database(err),
        })?;

        Ok(payment)
    }

    async fn find_by_uid(&self, payment_uid: &str) -> Result<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, payment_uid, amount, currency, sender_mobile, receiver_mobile, status
            FROM payments
            WHERE payment_uid = ?1
            "#,
        )
        .bind(payment_uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    async fn update_status(&self, payment_uid: &str, status: PaymentStatus) -> Result<Payment> {
        let updated = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET status = ?1
            WHERE payment_uid = ?2 AND status = 'PENDING'
            RETURNING id, payment_uid, amount, currency, sender_mobile, receiver_mobile, status
            "#,
        )
        .bind(status)
        .bind(payment_uid)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(payment) => Ok(payment),
            // Zero rows changed: either the uid is unknown or the record
            // already reached a terminal status.
            None => match self.find_by_uid(payment_uid).await? {
                Some(_) => Err(AppError::StatusAlreadyFinal),
                None => Err(AppError::PaymentNotFound),
            },
        }
    }
}
