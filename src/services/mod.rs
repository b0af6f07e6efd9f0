pub mod payment_service;
pub mod uid;
