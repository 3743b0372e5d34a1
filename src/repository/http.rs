//! HTTP implementation of the repository traits over the catalog REST API.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::blog::Blog;
use crate::domain::lead::{NewInquiry, NewQuote, NewSubscriber};
use crate::domain::nature::{Nature, NatureList};
use crate::domain::plant::{Plant, PlantWithStats};
use crate::domain::product::{Product, ProductPage};
use crate::domain::types::{BlogSlug, NatureId, PlantId, ProductId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    BlogListQuery, BlogReader, LeadWriter, NatureReader, PlantReader, ProductReader,
    ProductSearchQuery,
};

/// Every success body wraps its payload in `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// Error bodies optionally carry a human readable `{ "message": ... }`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Catalog API client shared by all request handlers.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    /// Builds a client for `base_url` (e.g. `https://host/api/v1`) with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepositoryError::Transport(format!("Invalid API url {base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RepositoryError::from)?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> RepositoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepositoryError::Transport("API url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&'static str, String)],
    ) -> RepositoryResult<Option<T>> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url} {params:?}");
        let response = self.client.get(url).query(params).send().await?;
        let response = ensure_success(response).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn post_json<B: Serialize>(&self, segments: &[&str], body: &B) -> RepositoryResult<()> {
        let url = self.endpoint(segments)?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());
    Err(RepositoryError::from_status(status, message))
}

impl ProductReader for HttpRepository {
    async fn search_products(&self, query: &ProductSearchQuery) -> RepositoryResult<ProductPage> {
        let mut page: ProductPage = self
            .get_data(&["products", "search"], &query.params())
            .await?
            .unwrap_or_default();
        page.normalize_ids();
        Ok(page)
    }

    async fn get_product(&self, id: &ProductId) -> RepositoryResult<Product> {
        let mut product: Product = self
            .get_data(&["products", id.as_str()], &[])
            .await?
            .ok_or(RepositoryError::NotFound)?;
        product.normalize_id();
        Ok(product)
    }

    async fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>> {
        let params = [("page", "1".to_string()), ("limit", limit.to_string())];
        let mut page: ProductPage = self
            .get_data(&["products", "allProducts"], &params)
            .await?
            .unwrap_or_default();
        page.normalize_ids();
        Ok(page.products)
    }
}

impl NatureReader for HttpRepository {
    async fn search_natures(&self, plant_id: &PlantId) -> RepositoryResult<Vec<Nature>> {
        let params = [("plantId", plant_id.to_string())];
        let list: NatureList = self
            .get_data(&["natures", "search"], &params)
            .await?
            .unwrap_or_default();
        Ok(list.natures)
    }

    async fn get_nature(&self, id: &NatureId) -> RepositoryResult<Nature> {
        self.get_data(&["natures", id.as_str()], &[])
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

impl PlantReader for HttpRepository {
    async fn list_plants_with_stats(&self) -> RepositoryResult<Vec<PlantWithStats>> {
        Ok(self
            .get_data(&["plants-with-stats"], &[])
            .await?
            .unwrap_or_default())
    }

    async fn list_plants_with_products(&self) -> RepositoryResult<Vec<Plant>> {
        Ok(self
            .get_data(&["plants", "with-products"], &[])
            .await?
            .unwrap_or_default())
    }
}

impl BlogReader for HttpRepository {
    async fn list_blogs(&self, query: &BlogListQuery) -> RepositoryResult<Vec<Blog>> {
        Ok(self
            .get_data(&["blogs"], &query.params())
            .await?
            .unwrap_or_default())
    }

    async fn get_blog_by_slug(&self, slug: &BlogSlug) -> RepositoryResult<Blog> {
        self.get_data(&["blogs", "slug", slug.as_str()], &[])
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

impl LeadWriter for HttpRepository {
    async fn create_quote(&self, quote: &NewQuote) -> RepositoryResult<()> {
        self.post_json(&["quotes", "create"], quote).await
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()> {
        self.post_json(&["inquires", "create"], inquiry).await
    }

    async fn subscribe(&self, subscriber: &NewSubscriber) -> RepositoryResult<()> {
        self.post_json(&["subscribers"], subscriber).await
    }
}
