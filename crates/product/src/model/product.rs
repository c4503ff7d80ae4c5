use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Availability of a product row. Soft delete is modeled as the one-way
/// transition to `Unavailable`; no operation transitions back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Available,
    Unavailable,
}

impl ProductStatus {
    /// Single place deciding whether a row is visible to read paths.
    pub fn is_visible(self) -> bool {
        matches!(self, ProductStatus::Available)
    }

    /// The only transition. `Unavailable` is terminal.
    pub fn retire(self) -> ProductStatus {
        ProductStatus::Unavailable
    }

    pub fn as_bool(self) -> bool {
        self.is_visible()
    }
}

impl From<bool> for ProductStatus {
    fn from(available: bool) -> Self {
        if available {
            ProductStatus::Available
        } else {
            ProductStatus::Unavailable
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    #[sqlx(rename = "available", try_from = "bool")]
    pub status: ProductStatus,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retire_is_one_way() {
        let status = ProductStatus::Available.retire();
        assert_eq!(status, ProductStatus::Unavailable);
        assert_eq!(status.retire(), ProductStatus::Unavailable);
    }

    #[test]
    fn visibility_follows_status() {
        assert!(ProductStatus::from(true).is_visible());
        assert!(!ProductStatus::from(false).is_visible());
        assert!(!ProductStatus::Unavailable.retire().as_bool());
    }
}
