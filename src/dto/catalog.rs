use serde::{Deserialize, Serialize};

use crate::catalog::{FacetSelection, FilterCriteria, LoadState};
use crate::domain::category::{Category, FacetKind};
use crate::domain::nature::{Nature, NatureWithCount};
use crate::domain::product::Product;

/// Query parameters shared by the catalog listing and its JSON feed.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

/// Server-rendered state of one catalog browser session.
#[derive(Debug, Serialize)]
pub struct CatalogListingData {
    pub category: Option<Category>,
    pub criteria: FilterCriteria,
    pub products: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
    pub load_state: LoadState,
    /// Whether the "load more" sentinel is rendered.
    pub prefetch: bool,
}

/// Body of `GET /api/v1/products/feed`.
#[derive(Debug, Serialize)]
pub struct FeedPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct FacetOptionView {
    pub label: String,
    pub selected: bool,
    /// Link that toggles this option.
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct FacetGroupView {
    pub title: String,
    pub kind: FacetKind,
    pub options: Vec<FacetOptionView>,
}

/// Data for the category page (`/nature/{categoryKey}`).
#[derive(Debug, Serialize)]
pub struct CategoryPageData {
    pub category: Category,
    pub natures: Vec<NatureWithCount>,
    /// Number of natures before facet filtering.
    pub total_natures: usize,
    pub selection: FacetSelection,
    pub facet_groups: Vec<FacetGroupView>,
    /// Link that clears every selected option.
    pub clear_href: String,
}

/// Data for a nature listing (`/nature/{natureId}/products`).
#[derive(Debug, Serialize)]
pub struct NatureListingData {
    pub nature: Nature,
    pub listing: CatalogListingData,
}
