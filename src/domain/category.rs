//! Central enumeration of the product categories shown on the site.
//!
//! Each category is keyed by a stable [`CategoryKey`] and carries the API
//! plant identifier it maps to, its presentation strings and the facet
//! groups offered on its category page. Nothing here is derived from
//! display names.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{PlantId, TypeConstraintError};

/// Stable key of a top-level product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Bitumen,
    Gabion,
    Construct,
}

impl CategoryKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bitumen => "bitumen",
            Self::Gabion => "gabion",
            Self::Construct => "construct",
        }
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitumen" => Ok(Self::Bitumen),
            "gabion" => Ok(Self::Gabion),
            "construct" => Ok(Self::Construct),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown category `{other}`"
            ))),
        }
    }
}

/// How a facet option is matched against a nature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    /// Option equals the nature name (case-insensitive).
    Name,
    /// Option equals one of the nature applications (case-insensitive).
    Application,
    /// Informational facet that never narrows the list.
    Label,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub title: String,
    pub kind: FacetKind,
    #[serde(default)]
    pub options: Vec<String>,
}

/// One configured category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub bg_image: String,
    #[serde(default)]
    pub catalog_pdf: String,
    pub plant_id: PlantId,
    #[serde(default)]
    pub facets: Vec<FacetGroup>,
}

/// Ordered lookup table over the configured categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Looks up a category from a raw query value such as `?categoryId=bitumen`.
    pub fn find(&self, raw_key: &str) -> Option<&Category> {
        raw_key.parse().ok().and_then(|key| self.get(key))
    }

    pub fn plant_id(&self, key: CategoryKey) -> Option<&PlantId> {
        self.get(key).map(|category| &category.plant_id)
    }

    pub fn by_plant(&self, plant_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.plant_id.as_str() == plant_id)
    }

    /// Position of the plant in configuration order; unknown plants sort last.
    pub fn plant_rank(&self, plant_id: &str) -> usize {
        self.categories
            .iter()
            .position(|category| category.plant_id.as_str() == plant_id)
            .unwrap_or(usize::MAX)
    }

    pub fn first(&self) -> Option<&Category> {
        self.categories.first()
    }
}
