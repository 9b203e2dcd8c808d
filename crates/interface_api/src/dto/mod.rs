//! Request and response bodies

pub mod fulfilment;
