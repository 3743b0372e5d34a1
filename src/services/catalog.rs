use std::sync::Arc;

use crate::catalog::{CatalogBrowser, FacetSelection, FilterCriteria, PageCursor, PrefetchTrigger};
use crate::domain::category::{Category, CategoryCatalog, CategoryKey};
use crate::domain::nature::NatureWithCount;
use crate::domain::types::{NatureId, PlantId};
use crate::dto::catalog::{
    CatalogListingData, CatalogQuery, CategoryPageData, FacetGroupView, FacetOptionView, FeedPage,
    NatureListingData,
};
use crate::repository::{NatureReader, ProductReader, ProductSearchQuery};
use crate::services::{ServiceError, ServiceResult};

/// Deepest page a server-rendered listing will accumulate.
pub const MAX_LISTING_PAGE: usize = 50;

impl CatalogQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_query(
            self.category_id.as_deref(),
            self.nature_id.as_deref(),
            self.search.as_deref(),
        )
    }

    fn target_page(&self) -> usize {
        self.page.unwrap_or(1).clamp(1, MAX_LISTING_PAGE)
    }

    /// Link to `path` with the same filters and the given page.
    pub fn page_href(&self, path: &str, page: usize) -> String {
        let query = CatalogQuery {
            page: Some(page),
            ..self.clone()
        };
        match serde_html_form::to_string(&query) {
            Ok(encoded) => format!("{path}?{encoded}"),
            Err(err) => {
                log::warn!("Failed to encode catalog query: {err}");
                path.to_string()
            }
        }
    }
}

/// Drives one browser from page 1 up to the requested page and snapshots it.
///
/// Stops early when results run out or a page fails; the failure is kept in
/// the returned load state so the page can offer a retry.
pub async fn load_catalog_listing<R>(
    repo: &R,
    categories: Arc<CategoryCatalog>,
    page_size: usize,
    query: &CatalogQuery,
) -> CatalogListingData
where
    R: ProductReader + ?Sized,
{
    let criteria = query.criteria();
    let target = query.target_page();
    let category = criteria
        .category_key
        .and_then(|key| categories.get(key))
        .cloned();

    let mut browser = CatalogBrowser::new(categories, page_size);
    let mut ticket = browser.set_filters(criteria.clone());
    while let Some(current) = ticket {
        browser.load(repo, current).await;
        if browser.view().page >= target {
            break;
        }
        ticket = browser.request_more();
    }

    let view = browser.view();
    CatalogListingData {
        category,
        criteria,
        products: view.items.to_vec(),
        total: view.total_count,
        page: view.page,
        has_more: view.has_more,
        load_state: view.load_state.clone(),
        prefetch: PrefetchTrigger::should_fire(&view),
    }
}

/// Fetches exactly one page for the infinite-scroll script.
pub async fn load_feed_page<R>(
    repo: &R,
    categories: &CategoryCatalog,
    page_size: usize,
    query: &CatalogQuery,
) -> ServiceResult<FeedPage>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let Some(search) = query.criteria().to_query(categories) else {
        return Ok(FeedPage {
            products: Vec::new(),
            total: 0,
            page,
            has_more: false,
        });
    };

    let cursor = PageCursor {
        page_number: page,
        page_size,
    };
    let result = repo
        .search_products(&search.paginate(cursor.page_number, cursor.page_size))
        .await
        .map_err(|err| {
            log::error!("Failed to load catalog feed page {page}: {err}");
            err
        })?;

    Ok(FeedPage {
        has_more: cursor.has_more(result.total),
        products: result.products,
        total: result.total,
        page,
    })
}

/// Loads a category page: its natures with product counts, narrowed by the
/// selected facet options.
pub async fn load_category_page<R>(
    repo: &R,
    categories: &CategoryCatalog,
    category_key: &str,
    facets: &[String],
) -> ServiceResult<CategoryPageData>
where
    R: NatureReader + ProductReader + ?Sized,
{
    let category = categories
        .find(category_key)
        .cloned()
        .ok_or(ServiceError::NotFound)?;

    let natures = repo
        .search_natures(&category.plant_id)
        .await
        .map_err(|err| {
            log::error!("Failed to load natures for {}: {err}", category.key);
            err
        })?;

    let selection = FacetSelection::parse(facets.iter().map(String::as_str), &category.facets);
    let total_natures = natures.len();
    let selected: Vec<_> = selection
        .apply(&natures, &category.facets)
        .into_iter()
        .cloned()
        .collect();

    let mut with_counts = Vec::with_capacity(selected.len());
    for nature in selected {
        let product_count = count_products(repo, &category.plant_id, &nature.id).await;
        with_counts.push(NatureWithCount {
            nature,
            product_count,
        });
    }

    Ok(CategoryPageData {
        facet_groups: facet_groups(&category, &selection),
        clear_href: category_href(&category, &FacetSelection::default()),
        category,
        natures: with_counts,
        total_natures,
        selection,
    })
}

fn category_href(category: &Category, selection: &FacetSelection) -> String {
    let query = selection.to_query();
    if query.is_empty() {
        format!("/nature/{}", category.key)
    } else {
        format!("/nature/{}?{query}", category.key)
    }
}

fn facet_groups(category: &Category, selection: &FacetSelection) -> Vec<FacetGroupView> {
    category
        .facets
        .iter()
        .map(|group| FacetGroupView {
            title: group.title.clone(),
            kind: group.kind,
            options: group
                .options
                .iter()
                .map(|option| FacetOptionView {
                    label: option.clone(),
                    selected: selection.is_selected(&group.title, option),
                    href: category_href(category, &selection.toggled(&group.title, option)),
                })
                .collect(),
        })
        .collect()
}

/// Product total for one nature; failures count as zero.
async fn count_products<R>(repo: &R, plant_id: &PlantId, nature_id: &str) -> usize
where
    R: ProductReader + ?Sized,
{
    let Ok(id) = NatureId::new(nature_id) else {
        return 0;
    };
    let query = ProductSearchQuery::new(plant_id.clone())
        .nature(id)
        .paginate(1, 1);
    match repo.search_products(&query).await {
        Ok(page) => page.total,
        Err(err) => {
            log::warn!("Failed to count products for nature {nature_id}: {err}");
            0
        }
    }
}

/// Loads a nature header and its product listing.
///
/// The category comes from `categoryId`, defaulting to the first configured one.
pub async fn load_nature_listing<R>(
    repo: &R,
    categories: Arc<CategoryCatalog>,
    page_size: usize,
    nature_id: &str,
    query: CatalogQuery,
) -> ServiceResult<NatureListingData>
where
    R: NatureReader + ProductReader + ?Sized,
{
    let id = NatureId::new(nature_id).map_err(|_| ServiceError::NotFound)?;
    let nature = repo.get_nature(&id).await.map_err(|err| {
        log::error!("Failed to load nature {nature_id}: {err}");
        err
    })?;

    let category_key = query
        .category_id
        .as_deref()
        .and_then(|raw| raw.parse::<CategoryKey>().ok())
        .or_else(|| categories.first().map(|category| category.key));

    let query = CatalogQuery {
        category_id: category_key.map(|key| key.to_string()),
        nature_id: Some(id.to_string()),
        ..query
    };
    let listing = load_catalog_listing(repo, categories, page_size, &query).await;

    Ok(NatureListingData { nature, listing })
}
