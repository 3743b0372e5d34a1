use serde::{Deserialize, Serialize};

use crate::domain::product::ProductImage;

/// Product subtype within a plant (category).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nature {
    #[serde(default, rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub technical_overview: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub image: Vec<ProductImage>,
}

impl Nature {
    pub fn cover(&self) -> Option<&ProductImage> {
        self.image.first()
    }
}

/// Body of `/natures/search`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NatureList {
    #[serde(default)]
    pub natures: Vec<Nature>,
}

/// Nature paired with the number of products the API reports for it.
#[derive(Clone, Debug, Serialize)]
pub struct NatureWithCount {
    #[serde(flatten)]
    pub nature: Nature,
    #[serde(default)]
    pub product_count: usize,
}
