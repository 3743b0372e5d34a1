//! Page-level use cases.
//!
//! Each service loads what one page needs through the repository traits and
//! returns a DTO. Routes only translate [`ServiceError`] into responses.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::{FieldErrors, FormError};
use crate::repository::errors::RepositoryError;

pub mod blog;
pub mod catalog;
pub mod leads;
pub mod main;
pub mod plants;
pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// Submission rejected upstream; message is safe to show.
    #[error("{0}")]
    Form(String),

    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("catalog API error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Rejected(message) => ServiceError::Form(message),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.field_errors())
    }
}
