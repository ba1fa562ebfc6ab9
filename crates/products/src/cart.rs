use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use storefront_core::{CartEntryId, ProductId, UserId, ValidationErrors, ValidationResult, Violation, fields};

/// Persisted cart entry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Validated wire payload for creating or updating a cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntryDraft {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub total_price: f64,
}

/// Full-record mapping for cart entries.
///
/// All declared fields pass through untransformed; `quantity` and
/// `total_price` carry positivity constraints.
pub struct CartEntrySerializer;

impl CartEntrySerializer {
    /// Validate an inbound payload into a draft, reporting every failing field.
    pub fn deserialize(payload: &Value) -> ValidationResult<CartEntryDraft> {
        let map = fields::object(payload)?;
        let mut errors = ValidationErrors::new();

        let user = errors.collect("user", fields::integer(map, "user"));
        let product = errors.collect("product", fields::integer(map, "product"));
        let quantity = errors.collect("quantity", fields::integer(map, "quantity"));
        let total_price = errors.collect("total_price", fields::number(map, "total_price"));

        if let Some(quantity) = quantity {
            if let Err(violation) = validate_quantity(quantity) {
                errors.push("quantity", violation);
            }
        }
        if let Some(total_price) = total_price {
            if let Err(violation) = validate_total_price(total_price) {
                errors.push("total_price", violation);
            }
        }

        match (user, product, quantity, total_price) {
            (Some(user), Some(product), Some(quantity), Some(total_price)) => {
                errors.into_result(CartEntryDraft {
                    user_id: UserId::new(user),
                    product_id: ProductId::new(product),
                    quantity,
                    total_price,
                })
            }
            _ => Err(errors),
        }
    }

    /// Project a record onto the wire: the full cart entry schema.
    pub fn serialize(entry: &CartEntry) -> Value {
        json!({
            "id": entry.id,
            "user": entry.user_id,
            "product": entry.product_id,
            "quantity": entry.quantity,
            "total_price": entry.total_price,
            "created_at": entry.created_at,
        })
    }
}

fn validate_quantity(quantity: i64) -> Result<(), Violation> {
    if quantity < 1 {
        Err(Violation::out_of_range("Quantity must be at least 1."))
    } else {
        Ok(())
    }
}

fn validate_total_price(total_price: f64) -> Result<(), Violation> {
    if total_price <= 0.0 {
        Err(Violation::out_of_range("Total price must be a positive number."))
    } else {
        Ok(())
    }
}
