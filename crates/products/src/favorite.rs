use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use storefront_core::{FavoriteProductId, ProductId, UserId, ValidationErrors, ValidationResult, Violation, fields};

/// Persisted favorite-product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteProduct {
    pub id: FavoriteProductId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

/// Validated wire payload for creating a favorite-product entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteProductDraft {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Full-record mapping for favorite products.
///
/// The schema already marks both associations required; the checks here
/// exist to hand back an entity-specific message.
pub struct FavoriteProductSerializer;

impl FavoriteProductSerializer {
    /// Validate an inbound payload into a draft, reporting every failing field.
    pub fn deserialize(payload: &Value) -> ValidationResult<FavoriteProductDraft> {
        let map = fields::object(payload)?;
        let mut errors = ValidationErrors::new();

        let user = match errors.collect("user", fields::optional_integer(map, "user")) {
            Some(Some(id)) => Some(UserId::new(id)),
            Some(None) => {
                errors.push("user", Violation::required("User is required."));
                None
            }
            None => None,
        };
        let product = match errors.collect("product", fields::optional_integer(map, "product")) {
            Some(Some(id)) => Some(ProductId::new(id)),
            Some(None) => {
                errors.push("product", Violation::required("Product is required."));
                None
            }
            None => None,
        };

        match (user, product) {
            (Some(user_id), Some(product_id)) => errors.into_result(FavoriteProductDraft {
                user_id,
                product_id,
            }),
            _ => Err(errors),
        }
    }

    /// Project a record onto the wire: the full favorite-product schema.
    pub fn serialize(favorite: &FavoriteProduct) -> Value {
        json!({
            "id": favorite.id,
            "user": favorite.user_id,
            "product": favorite.product_id,
            "created_at": favorite.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use storefront_core::ViolationKind;

    #[test]
    fn deserialize_accepts_both_associations() {
        let draft =
            FavoriteProductSerializer::deserialize(&json!({"user": 5, "product": 9})).unwrap();

        assert_eq!(draft.user_id, UserId::new(5));
        assert_eq!(draft.product_id, ProductId::new(9));
    }

    #[test]
    fn absent_user_gets_the_entity_specific_message() {
        let errors = FavoriteProductSerializer::deserialize(&json!({"product": 9})).unwrap_err();

        assert_eq!(errors.field("user")[0].kind, ViolationKind::RequiredFieldMissing);
        assert_eq!(errors.field("user")[0].message, "User is required.");
    }

    #[test]
    fn null_product_gets_the_entity_specific_message() {
        let errors =
            FavoriteProductSerializer::deserialize(&json!({"user": 5, "product": null})).unwrap_err();

        assert_eq!(errors.field("product")[0].kind, ViolationKind::RequiredFieldMissing);
        assert_eq!(errors.field("product")[0].message, "Product is required.");
    }

    #[test]
    fn both_missing_associations_are_reported_together() {
        let errors = FavoriteProductSerializer::deserialize(&json!({})).unwrap_err();

        assert_eq!(errors.field("user").len(), 1);
        assert_eq!(errors.field("product").len(), 1);
    }

    #[test]
    fn non_integer_association_is_a_type_mismatch() {
        let errors =
            FavoriteProductSerializer::deserialize(&json!({"user": "five", "product": 9}))
                .unwrap_err();

        assert_eq!(errors.field("user")[0].kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn serialize_emits_the_full_schema() {
        let favorite = FavoriteProduct {
            id: FavoriteProductId::new(2),
            user_id: UserId::new(5),
            product_id: ProductId::new(9),
            created_at: Utc::now(),
        };

        let wire = FavoriteProductSerializer::serialize(&favorite);
        let map = wire.as_object().unwrap();

        assert_eq!(map.len(), 4);
        assert_eq!(wire["user"], 5);
        assert_eq!(wire["product"], 9);
    }
}
