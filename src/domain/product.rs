use serde::{Deserialize, Serialize};

/// Catalog product as returned by the API.
///
/// Fields are passed through to the templates untouched; only the identifier
/// is normalized because the API emits either `_id` or `id`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename(deserialize = "_id"), default)]
    pub id: String,
    /// Alternative identifier some endpoints emit instead of `_id`.
    #[serde(rename(deserialize = "id"), default, skip_serializing)]
    pub legacy_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub brochure: Option<DocumentRef>,
    #[serde(default)]
    pub tds: Option<DocumentRef>,
    #[serde(rename = "plantId", default)]
    pub plant: Option<PlantRef>,
    #[serde(rename = "natureId", default)]
    pub nature: Option<NatureRef>,
    #[serde(default)]
    pub plant_availability: Vec<PlantAvailability>,
    #[serde(default)]
    pub technical_specifications: Vec<TechnicalSpecification>,
    #[serde(default)]
    pub applications: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Downloadable document attached to a product (brochure, TDS).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentRef {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantRef {
    #[serde(rename(deserialize = "_id"), default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NatureRef {
    #[serde(rename(deserialize = "_id"), default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantAvailability {
    #[serde(default)]
    pub state: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TechnicalSpecification {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// One page of `/products/search` results.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: usize,
}

impl Product {
    /// Most detail pages show at most this many gallery images.
    pub const GALLERY_LIMIT: usize = 5;

    /// Moves the alternative identifier into `id` when `_id` was absent.
    pub fn normalize_id(&mut self) {
        if !self.id.is_empty() {
            return;
        }
        if let Some(legacy) = self.legacy_id.take() {
            self.id = legacy;
        }
    }

    pub fn plant_id(&self) -> Option<&str> {
        self.plant.as_ref().and_then(|plant| plant.id.as_deref())
    }

    pub fn nature_id(&self) -> Option<&str> {
        self.nature.as_ref().and_then(|nature| nature.id.as_deref())
    }

    /// Path segment used to link to the product detail page.
    pub fn link_key(&self) -> &str {
        self.slug.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.id)
    }

    /// Images ordered primary-first, capped at [`Self::GALLERY_LIMIT`].
    pub fn gallery(&self) -> Vec<ProductImage> {
        let mut images = self.images.clone();
        // Stable sort keeps the API order among equally flagged images.
        images.sort_by_key(|image| !image.is_primary);
        images.truncate(Self::GALLERY_LIMIT);
        images
    }
}

impl ProductPage {
    pub fn normalize_ids(&mut self) {
        self.products.iter_mut().for_each(Product::normalize_id);
    }
}
