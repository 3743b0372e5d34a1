use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductImage};

#[derive(Debug, Serialize)]
pub struct ProductPageData {
    pub product: Product,
    /// Primary image first, at most five.
    pub gallery: Vec<ProductImage>,
    /// Category used for the breadcrumb.
    pub category: Option<Category>,
}
