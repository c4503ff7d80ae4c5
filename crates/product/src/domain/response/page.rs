use super::product::ProductResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: i32,
    pub total: i64,
    #[serde(rename = "lastPage")]
    pub last_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<ProductResponse>,
    pub meta: PageMeta,
}

/// Outcome of a paginated listing. An out-of-range page is a routine,
/// recoverable condition, so it travels inside `Ok` rather than as an error.
#[derive(Debug, Clone)]
pub enum ProductListOutcome {
    Page(ProductPage),
    PageOutOfRange { page: i32, last_page: i64 },
}

impl ProductListOutcome {
    pub fn page(&self) -> Option<&ProductPage> {
        match self {
            ProductListOutcome::Page(page) => Some(page),
            ProductListOutcome::PageOutOfRange { .. } => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ProductListOutcome::PageOutOfRange { .. })
    }
}

/// Wire body for the out-of-range case, kept compatible with the historical
/// `{ok: false, error}` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTooHigh {
    pub ok: bool,
    pub error: String,
}

impl PageTooHigh {
    pub fn new() -> Self {
        Self {
            ok: false,
            error: "Page number is too high".to_string(),
        }
    }
}

impl Default for PageTooHigh {
    fn default() -> Self {
        Self::new()
    }
}
