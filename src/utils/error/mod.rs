//! Error handling for the admission gateway

pub mod response;
pub mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AdmissionError, Result};
