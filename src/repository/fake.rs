//! In-memory repository for isolating services in tests.

use std::cell::{Cell, RefCell};

use crate::domain::blog::Blog;
use crate::domain::lead::{NewInquiry, NewQuote, NewSubscriber};
use crate::domain::nature::Nature;
use crate::domain::plant::{Plant, PlantWithStats};
use crate::domain::product::{NatureRef, PlantRef, Product, ProductPage};
use crate::domain::types::{BlogSlug, NatureId, PlantId, ProductId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    BlogListQuery, BlogReader, LeadWriter, NatureReader, PlantReader, ProductReader,
    ProductSearchQuery,
};

#[derive(Default)]
pub struct FakeRepository {
    pub products: Vec<Product>,
    /// Natures paired with the plant they belong to.
    pub natures: Vec<(String, Nature)>,
    pub plants_with_stats: Vec<PlantWithStats>,
    pub plants: Vec<Plant>,
    pub blogs: Vec<Blog>,
    /// Every call fails with a transport error when set.
    pub offline: Cell<bool>,
    /// Lead submissions are rejected with this message when set.
    pub reject_leads: Option<String>,
    pub searches: RefCell<Vec<ProductSearchQuery>>,
    pub blog_queries: RefCell<Vec<BlogListQuery>>,
    pub leads: RefCell<Vec<serde_json::Value>>,
}

pub fn product(id: &str, plant_id: &str, nature_id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        plant: Some(PlantRef {
            id: Some(plant_id.to_string()),
            ..PlantRef::default()
        }),
        nature: Some(NatureRef {
            id: Some(nature_id.to_string()),
            ..NatureRef::default()
        }),
        ..Product::default()
    }
}

pub fn nature(id: &str, name: &str, applications: &[&str]) -> Nature {
    Nature {
        id: id.to_string(),
        name: name.to_string(),
        applications: applications.iter().map(|a| a.to_string()).collect(),
        ..Nature::default()
    }
}

pub fn blog(slug: &str, category: &str, featured: bool) -> Blog {
    Blog {
        id: format!("id-{slug}"),
        title: format!("Post {slug}"),
        slug: slug.to_string(),
        category: category.to_string(),
        featured,
        content: format!("## {slug}\nBody of {slug}."),
        ..Blog::default()
    }
}

impl FakeRepository {
    fn check_online(&self) -> RepositoryResult<()> {
        if self.offline.get() {
            Err(RepositoryError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn record_lead<T: serde::Serialize>(&self, lead: &T) -> RepositoryResult<()> {
        self.check_online()?;
        if let Some(message) = &self.reject_leads {
            return Err(RepositoryError::Rejected(message.clone()));
        }
        let value = serde_json::to_value(lead)?;
        self.leads.borrow_mut().push(value);
        Ok(())
    }
}

impl ProductReader for FakeRepository {
    async fn search_products(&self, query: &ProductSearchQuery) -> RepositoryResult<ProductPage> {
        self.searches.borrow_mut().push(query.clone());
        self.check_online()?;

        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.plant_id() == Some(query.plant_id.as_str()))
            .filter(|p| match &query.nature_id {
                Some(nature_id) => p.nature_id() == Some(nature_id.as_str()),
                None => true,
            })
            .filter(|p| match &query.search {
                Some(term) => p.name.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .collect();

        let (skip, take) = match &query.pagination {
            Some(pagination) => (
                pagination.page.saturating_sub(1) * pagination.per_page,
                pagination.per_page,
            ),
            None => (0, matching.len()),
        };

        Ok(ProductPage {
            products: matching.iter().skip(skip).take(take).map(|p| (*p).clone()).collect(),
            total: matching.len(),
        })
    }

    async fn get_product(&self, id: &ProductId) -> RepositoryResult<Product> {
        self.check_online()?;
        self.products
            .iter()
            .find(|p| p.id == id.as_str() || p.slug.as_deref() == Some(id.as_str()))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>> {
        self.check_online()?;
        Ok(self.products.iter().take(limit).cloned().collect())
    }
}

impl NatureReader for FakeRepository {
    async fn search_natures(&self, plant_id: &PlantId) -> RepositoryResult<Vec<Nature>> {
        self.check_online()?;
        Ok(self
            .natures
            .iter()
            .filter(|(plant, _)| plant == plant_id.as_str())
            .map(|(_, nature)| nature.clone())
            .collect())
    }

    async fn get_nature(&self, id: &NatureId) -> RepositoryResult<Nature> {
        self.check_online()?;
        self.natures
            .iter()
            .map(|(_, nature)| nature)
            .find(|nature| nature.id == id.as_str())
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

impl PlantReader for FakeRepository {
    async fn list_plants_with_stats(&self) -> RepositoryResult<Vec<PlantWithStats>> {
        self.check_online()?;
        Ok(self.plants_with_stats.clone())
    }

    async fn list_plants_with_products(&self) -> RepositoryResult<Vec<Plant>> {
        self.check_online()?;
        Ok(self.plants.clone())
    }
}

impl BlogReader for FakeRepository {
    async fn list_blogs(&self, query: &BlogListQuery) -> RepositoryResult<Vec<Blog>> {
        self.blog_queries.borrow_mut().push(query.clone());
        self.check_online()?;
        let blogs = self
            .blogs
            .iter()
            .filter(|b| query.category.as_ref().is_none_or(|c| &b.category == c))
            .filter(|b| query.featured.is_none_or(|featured| b.featured == featured))
            .filter(|b| query.exclude_slug.as_ref() != Some(&b.slug))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(blogs)
    }

    async fn get_blog_by_slug(&self, slug: &BlogSlug) -> RepositoryResult<Blog> {
        self.check_online()?;
        self.blogs
            .iter()
            .find(|b| b.slug == slug.as_str())
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

impl LeadWriter for FakeRepository {
    async fn create_quote(&self, quote: &NewQuote) -> RepositoryResult<()> {
        self.record_lead(quote)
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()> {
        self.record_lead(inquiry)
    }

    async fn subscribe(&self, subscriber: &NewSubscriber) -> RepositoryResult<()> {
        self.record_lead(subscriber)
    }
}
