//! Product entity and its inbound payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationErrors};

/// Digits kept after the decimal point by the `price` column.
pub const PRICE_SCALE: u32 = 2;

/// Prices must stay strictly below this magnitude (`NUMERIC(12, 2)`).
pub const PRICE_LIMIT: i64 = 10_000_000_000;

/// A catalog product, as stored in the `products` table.
///
/// `id` is assigned by the store on insert; whatever a caller puts there
/// before insertion is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    /// Optional at the type level, required by [`ProductPayload::validate`].
    pub price: Option<Decimal>,
}

impl Product {
    /// Build a product that has not been stored yet (id 0).
    pub fn new(name: impl Into<String>, category: Option<&str>, price: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.map(str::to_owned),
            price: Some(price),
        }
    }

    /// Whether this product's category equals `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }
}

/// Create/update request body. Every field is optional on the wire so that
/// missing fields surface as field errors rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductPayload {
    /// Check required fields and produce a product carrying `id`.
    ///
    /// # Rules
    /// - `name` must be present and not blank
    /// - `price` must be present (zero is allowed), with at most
    ///   [`PRICE_SCALE`] decimals and a magnitude below [`PRICE_LIMIT`]
    pub fn validate(self, id: i32) -> Result<Product, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match self.name {
            None => {
                errors.push(ValidationError::Required { field: "name" });
                None
            }
            Some(name) if name.trim().is_empty() => {
                errors.push(ValidationError::Empty { field: "name" });
                None
            }
            Some(name) => Some(name),
        };

        match self.price {
            None => errors.push(ValidationError::Required { field: "price" }),
            Some(price) => {
                if let Err(e) = check_price(price) {
                    errors.push(e);
                }
            }
        }

        match name {
            Some(name) if errors.is_empty() => Ok(Product {
                id,
                name,
                category: self.category,
                price: self.price,
            }),
            _ => Err(errors),
        }
    }
}

/// Reject prices the column would round or overflow.
fn check_price(price: Decimal) -> Result<(), ValidationError> {
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::InvalidFormat {
            field: "price",
            reason: format!("at most {} decimal places allowed", PRICE_SCALE),
        });
    }

    if price.abs() >= Decimal::from(PRICE_LIMIT) {
        return Err(ValidationError::InvalidFormat {
            field: "price",
            reason: format!("must be less than {}", PRICE_LIMIT),
        });
    }

    Ok(())
}
