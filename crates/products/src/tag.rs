use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use storefront_core::{ProductTagId, ValidationErrors, ValidationResult, Violation, fields};

/// Persisted product-tag record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTag {
    pub id: ProductTagId,
    pub name: String,
}

/// Validated wire payload for creating or updating a product tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTagDraft {
    pub name: String,
}

/// Full-record mapping for product tags.
pub struct ProductTagSerializer;

impl ProductTagSerializer {
    pub const NAME_MIN_CHARS: usize = 4;

    /// Validate an inbound payload into a draft, reporting every failing field.
    pub fn deserialize(payload: &Value) -> ValidationResult<ProductTagDraft> {
        let map = fields::object(payload)?;
        let mut errors = ValidationErrors::new();

        let name = errors.collect("name", fields::text(map, "name"));
        if let Some(name) = &name {
            if let Err(violation) = validate_name(name) {
                errors.push("name", violation);
            }
        }

        match name {
            Some(name) => errors.into_result(ProductTagDraft { name }),
            None => Err(errors),
        }
    }

    /// Project a record onto the wire: the full product-tag schema.
    pub fn serialize(tag: &ProductTag) -> Value {
        json!({
            "id": tag.id,
            "name": tag.name,
        })
    }
}

fn validate_name(name: &str) -> Result<(), Violation> {
    // Counted in characters, not bytes; tag names are not ASCII-only.
    if name.chars().count() < ProductTagSerializer::NAME_MIN_CHARS {
        Err(Violation::too_short("minimum 4 characters"))
    } else {
        Ok(())
    }
}
