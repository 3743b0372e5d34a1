use serde::{Deserialize, Serialize};

/// Manufacturing plant with its product stock list (`/plants/with-products`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub established: Option<String>,
    #[serde(default)]
    pub machinery: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub products: Vec<PlantProduct>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub quantity: String,
}

/// Stock level derived from the free-text status the API reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    Limited,
    OutOfStock,
    Other,
}

impl StockStatus {
    pub fn parse(status: &str) -> Self {
        match status.trim() {
            "In Stock" => Self::InStock,
            "Limited" => Self::Limited,
            "Out of Stock" => Self::OutOfStock,
            _ => Self::Other,
        }
    }
}

impl PlantProduct {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::parse(&self.status)
    }
}

/// Plant summary with aggregate counts (`/plants-with-stats`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantWithStats {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_product_count: usize,
    #[serde(default)]
    pub top_natures: Vec<TopNature>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopNature {
    #[serde(rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product_count: usize,
}
