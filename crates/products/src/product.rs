use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use storefront_core::{ProductId, ValidationErrors, ValidationResult, Violation, fields};

/// Currency a product is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Gel,
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Gel => "GEL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "GEL" => Some(Currency::Gel),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Expected positive; deliberately unchecked at this layer.
    pub price: f64,
    pub currency: Currency,
}

/// Validated wire payload for creating or updating a product.
///
/// Carries exactly the wire field set; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: Currency,
}

/// Wire mapping for products: `{name, description, price, currency}`.
///
/// Pure mapping in both directions; no side effects.
pub struct ProductSerializer;

impl ProductSerializer {
    /// Validate an inbound payload into a draft, reporting every failing field.
    pub fn deserialize(payload: &Value) -> ValidationResult<ProductDraft> {
        let map = fields::object(payload)?;
        let mut errors = ValidationErrors::new();

        let name = errors.collect("name", fields::text(map, "name"));
        let description = errors.collect("description", fields::text(map, "description"));
        let price = errors.collect("price", fields::number(map, "price"));
        let currency = errors.collect("currency", currency_field(map));

        match (name, description, price, currency) {
            (Some(name), Some(description), Some(price), Some(currency)) => {
                errors.into_result(ProductDraft {
                    name,
                    description,
                    price,
                    currency,
                })
            }
            _ => Err(errors),
        }
    }

    /// Project a record onto the wire field set.
    pub fn serialize(product: &Product) -> Value {
        json!({
            "name": product.name,
            "description": product.description,
            "price": product.price,
            "currency": product.currency,
        })
    }
}

fn currency_field(map: &Map<String, Value>) -> Result<Currency, Violation> {
    let raw = fields::text(map, "currency")?;
    Currency::parse(&raw)
        .ok_or_else(|| Violation::invalid_choice(format!("\"{raw}\" is not a valid choice.")))
}
