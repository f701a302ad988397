//! Services coordinating the search workflows.

use thiserror::Error;

use crate::fetcher::FetchError;
use crate::forms::{FieldErrors, FormError};

pub mod results;
pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(FieldErrors),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => ServiceError::Form(errors),
        }
    }
}
