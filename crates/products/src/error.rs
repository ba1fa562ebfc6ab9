//! Serializer error model.

use thiserror::Error;

use storefront_core::ValidationErrors;

use crate::store::StoreError;

/// Failure of a validation or creation call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializerError {
    /// One or more fields failed validation; every failing field is reported.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The record store failed outside the validation contract.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SerializerError {
    /// The collected field violations, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SerializerError::Validation(errors) => Some(errors),
            SerializerError::Store(_) => None,
        }
    }
}
