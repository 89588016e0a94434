use serde::{Deserialize, Serialize};

use crate::{DomainError, ItemCategory, ItemId, StyleTags};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidPrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    ToBuy,
    Bought,
}

impl PurchaseStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::ToBuy => Self::Bought,
            Self::Bought => Self::ToBuy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub category: ItemCategory,
    pub style_tags: StyleTags,
    pub status: PurchaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ShoppingItem {
    pub fn toggle_status(&mut self) -> PurchaseStatus {
        self.status = self.status.toggled();
        self.status
    }

    pub fn is_bought(&self) -> bool {
        self.status == PurchaseStatus::Bought
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_rejects_negative_and_non_finite() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(1580.0).is_ok());
        assert_eq!(Price::new(-1.0), Err(DomainError::InvalidPrice(-1.0)));
        assert!(matches!(
            Price::new(f64::NAN),
            Err(DomainError::InvalidPrice(_))
        ));
    }

    #[test]
    fn toggling_twice_restores_status() {
        let mut item = ShoppingItem {
            id: ItemId::new("s1").expect("id"),
            name: "Beige blazer".to_string(),
            price: Price::new(1580.0).expect("price"),
            category: ItemCategory::Outerwear,
            style_tags: StyleTags::new(),
            status: PurchaseStatus::ToBuy,
            link: None,
        };

        assert_eq!(item.toggle_status(), PurchaseStatus::Bought);
        assert!(item.is_bought());
        assert_eq!(item.toggle_status(), PurchaseStatus::ToBuy);
    }
}
