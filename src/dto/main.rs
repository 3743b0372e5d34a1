use serde::Serialize;

use crate::domain::plant::PlantWithStats;
use crate::domain::product::Product;

/// Data required to render the home page.
#[derive(Debug, Default, Serialize)]
pub struct HomePageData {
    /// Plants in configured category order; empty when the API failed.
    pub plants: Vec<PlantWithStats>,
    /// One showcase product per configured category.
    pub flagship: Vec<Product>,
}
