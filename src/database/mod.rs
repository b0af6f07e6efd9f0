pub mod connection;
pub mod payment_store;
