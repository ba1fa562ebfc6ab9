use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use storefront_core::{ProductId, ReviewId, UserId, ValidationErrors, Violation, fields};

use crate::context::RequestContext;
use crate::error::SerializerError;
use crate::product::Product;
use crate::store::{NewReview, RecordStore};

/// Persisted review record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub content: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

/// Validated wire payload for creating a review.
///
/// Holds the resolved target product rather than the raw identifier so the
/// create path does not look it up twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub product: Product,
    pub content: String,
    pub rating: i64,
}

/// Inbound review validation plus creation attributed to the acting user.
///
/// `product_id` is write-only: consumed on input, suppressed from the wire
/// output.
pub struct ReviewSerializer;

impl ReviewSerializer {
    pub const RATING_MIN: i64 = 1;
    pub const RATING_MAX: i64 = 5;

    /// Validate an inbound payload, resolving `product_id` against the store.
    ///
    /// Field violations are collected across all fields; store failures other
    /// than a missing product surface as [`SerializerError::Store`].
    pub fn deserialize(
        store: &dyn RecordStore,
        payload: &Value,
    ) -> Result<ReviewDraft, SerializerError> {
        let map = fields::object(payload)?;
        let mut errors = ValidationErrors::new();

        let product_id = errors.collect("product_id", fields::integer(map, "product_id"));
        let content = errors.collect("content", fields::text(map, "content"));
        let rating = errors.collect("rating", fields::integer(map, "rating"));

        let product = match product_id {
            Some(id) => {
                let found = store.product_by_id(ProductId::new(id))?;
                if found.is_none() {
                    errors.push(
                        "product_id",
                        Violation::reference_not_found("Invalid product_id. Product does not exist."),
                    );
                }
                found
            }
            None => None,
        };

        if let Some(rating) = rating {
            if let Err(violation) = validate_rating(rating) {
                errors.push("rating", violation);
            }
        }

        match (product, content, rating) {
            (Some(product), Some(content), Some(rating)) => errors
                .into_result(ReviewDraft {
                    product,
                    content,
                    rating,
                })
                .map_err(SerializerError::Validation),
            _ => Err(SerializerError::Validation(errors)),
        }
    }

    /// Validate and persist one review attributed to the acting user.
    ///
    /// Not idempotent: identical input twice creates two reviews. There is no
    /// idempotency key on the wire.
    pub fn create(
        store: &dyn RecordStore,
        ctx: &RequestContext,
        payload: &Value,
    ) -> Result<Review, SerializerError> {
        let draft = Self::deserialize(store, payload)?;
        let review = store.insert_review(NewReview {
            product_id: draft.product.id,
            user_id: ctx.current_user(),
            content: draft.content,
            rating: draft.rating,
        })?;
        tracing::info!(review_id = %review.id, product_id = %review.product_id, "review created");
        Ok(review)
    }

    /// Project a record onto the wire field set; `product_id` is suppressed.
    pub fn serialize(review: &Review) -> Value {
        json!({
            "content": review.content,
            "rating": review.rating,
        })
    }
}

fn validate_rating(rating: i64) -> Result<(), Violation> {
    if (ReviewSerializer::RATING_MIN..=ReviewSerializer::RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(Violation::out_of_range("Rating must be between 1 and 5."))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::product::Currency;
    use storefront_core::ViolationKind;

    struct FakeStore {
        products: HashMap<i64, Product>,
        reviews: RefCell<Vec<Review>>,
    }

    impl FakeStore {
        fn with_product(id: i64) -> Self {
            let product = Product {
                id: ProductId::new(id),
                name: "Grinder".to_string(),
                description: "Burr coffee grinder".to_string(),
                price: 120.0,
                currency: Currency::Usd,
            };
            Self {
                products: HashMap::from([(id, product)]),
                reviews: RefCell::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                products: HashMap::new(),
                reviews: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecordStore for FakeStore {
        fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, crate::StoreError> {
            Ok(self.products.get(&id.as_i64()).cloned())
        }

        fn insert_review(&self, review: NewReview) -> Result<Review, crate::StoreError> {
            let mut reviews = self.reviews.borrow_mut();
            let stored = Review {
                id: ReviewId::new(reviews.len() as i64 + 1),
                product_id: review.product_id,
                user_id: review.user_id,
                content: review.content,
                rating: review.rating,
                created_at: Utc::now(),
            };
            reviews.push(stored.clone());
            Ok(stored)
        }
    }

    #[test]
    fn missing_product_reports_reference_not_found() {
        let store = FakeStore::empty();
        let err = ReviewSerializer::deserialize(
            &store,
            &json!({"product_id": 42, "content": "great", "rating": 5}),
        )
        .unwrap_err();

        let errors = err.validation().unwrap();
        assert_eq!(
            errors.messages().get("product_id"),
            Some(&vec!["Invalid product_id. Product does not exist.".to_string()])
        );
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        let store = FakeStore::with_product(1);

        for rating in [1, 3, 5] {
            let draft = ReviewSerializer::deserialize(
                &store,
                &json!({"product_id": 1, "content": "ok", "rating": rating}),
            )
            .unwrap();
            assert_eq!(draft.rating, rating);
        }

        for rating in [0, 6] {
            let err = ReviewSerializer::deserialize(
                &store,
                &json!({"product_id": 1, "content": "ok", "rating": rating}),
            )
            .unwrap_err();
            let errors = err.validation().unwrap();
            assert_eq!(errors.field("rating")[0].kind, ViolationKind::OutOfRange);
        }
    }

    #[test]
    fn reference_and_range_failures_are_reported_together() {
        let store = FakeStore::empty();
        let err = ReviewSerializer::deserialize(
            &store,
            &json!({"product_id": 42, "content": "meh", "rating": 9}),
        )
        .unwrap_err();

        let errors = err.validation().unwrap();
        assert_eq!(errors.field("product_id")[0].kind, ViolationKind::ReferenceNotFound);
        assert_eq!(errors.field("rating")[0].kind, ViolationKind::OutOfRange);
    }

    #[test]
    fn create_attributes_the_acting_user() {
        let store = FakeStore::with_product(1);
        let ctx = RequestContext::new(UserId::new(77));

        let review = ReviewSerializer::create(
            &store,
            &ctx,
            &json!({"product_id": 1, "content": "nice", "rating": 3}),
        )
        .unwrap();

        assert_eq!(review.product_id, ProductId::new(1));
        assert_eq!(review.user_id, UserId::new(77));
        assert_eq!(review.content, "nice");
        assert_eq!(review.rating, 3);
    }

    #[test]
    fn create_twice_with_identical_input_creates_two_reviews() {
        let store = FakeStore::with_product(1);
        let ctx = RequestContext::new(UserId::new(77));
        let payload = json!({"product_id": 1, "content": "nice", "rating": 3});

        let first = ReviewSerializer::create(&store, &ctx, &payload).unwrap();
        let second = ReviewSerializer::create(&store, &ctx, &payload).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.reviews.borrow().len(), 2);
    }

    #[test]
    fn serialize_suppresses_product_id() {
        let review = Review {
            id: ReviewId::new(1),
            product_id: ProductId::new(1),
            user_id: UserId::new(77),
            content: "nice".to_string(),
            rating: 3,
            created_at: Utc::now(),
        };

        let wire = ReviewSerializer::serialize(&review);
        let map = wire.as_object().unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(wire["content"], "nice");
        assert_eq!(wire["rating"], 3);
        assert!(map.get("product_id").is_none());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Property: a rating is accepted iff it lies in [1, 5].
            #[test]
            fn rating_accepted_iff_in_bounds(rating in -100i64..100) {
                let store = FakeStore::with_product(1);
                let result = ReviewSerializer::deserialize(
                    &store,
                    &json!({"product_id": 1, "content": "ok", "rating": rating}),
                );

                if (1..=5).contains(&rating) {
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(result.is_err());
                }
            }
        }
    }
}
