//! Request handlers

pub mod cases;
pub mod fulfilment;
pub mod health;
