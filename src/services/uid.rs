// services/uid.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Builds a human-readable payment identifier:
/// `PAY_<last4(sender)>_<last4(receiver)>_<UTC YYYYMMDDTHHMMSS>_<4 uppercase hex>`.
///
/// The random suffix carries only ~16 bits of entropy, so it is a uniqueness
/// aid rather than a guarantee; the UNIQUE constraint on `payment_uid` is
/// what actually enforces uniqueness. Callers validate that both mobile
/// numbers are at least 4 characters long.
pub fn generate_payment_uid(sender_mobile: &str, receiver_mobile: &str) -> String {
    build_payment_uid(sender_mobile, receiver_mobile, Utc::now(), random_suffix())
}

fn build_payment_uid(
    sender_mobile: &str,
    receiver_mobile: &str,
    instant: DateTime<Utc>,
    suffix: String,
) -> String {
    format!(
        "PAY_{}_{}_{}_{}",
        last4(sender_mobile),
        last4(receiver_mobile),
        instant.format("%Y%m%dT%H%M%S"),
        suffix,
    )
}

fn last4(value: &str) -> &str {
    match value.char_indices().rev().nth(3) {
        Some((idx, _)) => &value[idx..],
        None => value,
    }
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..4].to_uppercase()
}
