//! Service layer: authorization checks, validation and orchestration on top
//! of the repository and the auth service client.

use thiserror::Error;

use crate::auth_api::AuthError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod earnings;
pub mod subscriptions;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("auth service error: {0}")]
    Auth(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ServiceError {
    fn from(err: AuthError) -> Self {
        ServiceError::Auth(err.to_string())
    }
}
