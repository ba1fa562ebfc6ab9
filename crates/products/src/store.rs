//! Record store port consumed by the serializers.

use thiserror::Error;

use storefront_core::{ProductId, UserId};

use crate::product::Product;
use crate::review::Review;

/// Storage failure outside the validation contract.
///
/// Field-level outcomes (a product that simply does not exist) are *not*
/// store errors; they surface as violations on the failing field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store is unusable (poisoned lock, broken connection).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Fields of a review before the store assigns its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub content: String,
    pub rating: i64,
}

/// Lookup and insert operations the serializers need from the record store.
///
/// The store is expected to serialize concurrent writes itself; no locking,
/// retry, or ordering guarantee is added at this layer.
pub trait RecordStore {
    /// Resolve a product by identifier; `Ok(None)` if it does not exist.
    fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a new review and return the stored record.
    fn insert_review(&self, review: NewReview) -> Result<Review, StoreError>;
}
