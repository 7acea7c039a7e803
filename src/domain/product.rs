use crate::error::CatalogError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// A non-negative catalog price in the store's currency unit.
///
/// Wraps `rust_decimal::Decimal` so comparisons and range checks stay exact.
/// Deserialization accepts JSON numbers or numeric strings and rejects
/// negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CatalogError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(CatalogError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CatalogError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// Whole prices go out as integers, the rest as floats, matching the asset format.
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero()
            && let Some(whole) = self.0.to_u64()
        {
            return serializer.serialize_u64(whole);
        }
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.collect_str(&self.0),
        }
    }
}

/// One catalog entry, as stored in the products JSON asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier; the default sort key.
    pub id: u32,
    pub name: String,
    pub description: String,
    /// One of a small fixed set of category names, e.g. `Beds`.
    pub category: String,
    pub price: Price,
    pub in_stock: bool,
}
