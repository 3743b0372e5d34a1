//! Access to the external catalog API.
//!
//! Pages depend on the narrow reader/writer traits below; [`HttpRepository`]
//! implements all of them over HTTP and tests substitute in-memory fakes.

use crate::{
    domain::{
        blog::Blog,
        lead::{NewInquiry, NewQuote, NewSubscriber},
        nature::Nature,
        plant::{Plant, PlantWithStats},
        product::{Product, ProductPage},
        types::{BlogSlug, NatureId, PlantId, ProductId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(test)]
pub(crate) mod fake;
pub mod http;

pub use http::HttpRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query for `GET /products/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearchQuery {
    pub plant_id: PlantId,
    pub nature_id: Option<NatureId>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ProductSearchQuery {
    pub fn new(plant_id: PlantId) -> Self {
        Self {
            plant_id,
            nature_id: None,
            search: None,
            pagination: None,
        }
    }

    pub fn nature(mut self, nature_id: NatureId) -> Self {
        self.nature_id = Some(nature_id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Query string pairs in the order the API documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("plantId", self.plant_id.to_string())];
        if let Some(nature_id) = &self.nature_id {
            params.push(("natureId", nature_id.to_string()));
        }
        if let Some(Pagination { page, per_page }) = &self.pagination {
            params.push(("page", page.to_string()));
            params.push(("limit", per_page.to_string()));
        }
        if let Some(term) = &self.search {
            params.push(("search", term.clone()));
        }
        params
    }
}

/// Query for `GET /blogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
    pub exclude_slug: Option<String>,
}

impl BlogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn exclude_slug(mut self, slug: impl Into<String>) -> Self {
        self.exclude_slug = Some(slug.into());
        self
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(slug) = &self.exclude_slug {
            params.push(("excludeSlug", slug.clone()));
        }
        params
    }
}

#[allow(async_fn_in_trait)]
pub trait ProductReader {
    async fn search_products(&self, query: &ProductSearchQuery) -> RepositoryResult<ProductPage>;
    async fn get_product(&self, id: &ProductId) -> RepositoryResult<Product>;
    async fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>>;
}

#[allow(async_fn_in_trait)]
pub trait NatureReader {
    async fn search_natures(&self, plant_id: &PlantId) -> RepositoryResult<Vec<Nature>>;
    async fn get_nature(&self, id: &NatureId) -> RepositoryResult<Nature>;
}

#[allow(async_fn_in_trait)]
pub trait PlantReader {
    async fn list_plants_with_stats(&self) -> RepositoryResult<Vec<PlantWithStats>>;
    async fn list_plants_with_products(&self) -> RepositoryResult<Vec<Plant>>;
}

#[allow(async_fn_in_trait)]
pub trait BlogReader {
    async fn list_blogs(&self, query: &BlogListQuery) -> RepositoryResult<Vec<Blog>>;
    async fn get_blog_by_slug(&self, slug: &BlogSlug) -> RepositoryResult<Blog>;
}

#[allow(async_fn_in_trait)]
pub trait LeadWriter {
    async fn create_quote(&self, quote: &NewQuote) -> RepositoryResult<()>;
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()>;
    async fn subscribe(&self, subscriber: &NewSubscriber) -> RepositoryResult<()>;
}
