use serde::Serialize;

use crate::domain::plant::{Plant, PlantProduct, StockStatus};

#[derive(Debug, Serialize)]
pub struct StockRow {
    pub product: PlantProduct,
    pub status: StockStatus,
}

#[derive(Debug, Serialize)]
pub struct PlantStock {
    pub plant: Plant,
    pub rows: Vec<StockRow>,
}

/// Data for `/plant-availability`.
#[derive(Debug, Serialize)]
pub struct PlantAvailabilityData {
    pub plants: Vec<PlantStock>,
    /// Every plant as `(id, name)` for the selector.
    pub options: Vec<(String, String)>,
    /// Selected plant id, or `all`.
    pub selected: String,
}
