use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::catalog::LoadState;
use crate::domain::category::CategoryCatalog;
use crate::dto::catalog::{CatalogListingData, CatalogQuery};
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, not_found, page_error, render_template};
use crate::services::catalog as catalog_service;
use crate::services::products as products_service;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductQueryParams {
    category_id: Option<String>,
}

#[derive(Default, Deserialize)]
struct FacetQueryParams {
    #[serde(default)]
    facet: Vec<String>,
}

/// Inserts the listing plus its "load more" and retry links.
fn insert_listing(
    context: &mut Context,
    path: &str,
    query: &CatalogQuery,
    listing: &CatalogListingData,
) {
    context.insert("listing", listing);
    if listing.prefetch {
        context.insert("next_href", &query.page_href(path, listing.page + 1));
    }
    if matches!(listing.load_state, LoadState::Error(_)) {
        let target = query.page.unwrap_or(1).max(listing.page);
        context.insert("retry_href", &query.page_href(path, target));
    }
}

#[get("/products")]
pub async fn show_products(
    params: web::Query<CatalogQuery>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let mut context = base_context(&flash_messages, "products", &categories);

    let Some(raw_category) = query.category_id.as_deref() else {
        return render_template(&tera, "products/overview.html", &context);
    };
    if categories.find(raw_category).is_none() {
        return not_found(&tera, &context);
    }

    let listing = catalog_service::load_catalog_listing(
        repo.get_ref(),
        categories.clone().into_inner(),
        server_config.page_size,
        &query,
    )
    .await;

    insert_listing(&mut context, "/products", &query, &listing);
    render_template(&tera, "products/listing.html", &context)
}

#[get("/product/{product_id}")]
pub async fn show_product(
    product_id: web::Path<String>,
    params: web::Query<ProductQueryParams>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "products", &categories);

    match products_service::load_product_page(
        repo.get_ref(),
        &categories,
        &product_id,
        params.category_id.as_deref(),
    )
    .await
    {
        Ok(data) => {
            context.insert("product", &data.product);
            context.insert("gallery", &data.gallery);
            context.insert("category", &data.category);
            render_template(&tera, "products/detail.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "product page"),
    }
}

#[get("/nature/{category_key}")]
pub async fn show_category(
    req: HttpRequest,
    category_key: web::Path<String>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "products", &categories);
    let params: FacetQueryParams =
        serde_html_form::from_str(req.query_string()).unwrap_or_default();

    match catalog_service::load_category_page(
        repo.get_ref(),
        &categories,
        &category_key,
        &params.facet,
    )
    .await
    {
        Ok(data) => {
            context.insert("category", &data.category);
            context.insert("natures", &data.natures);
            context.insert("total_natures", &data.total_natures);
            context.insert("facet_groups", &data.facet_groups);
            context.insert("has_selection", &!data.selection.is_empty());
            context.insert("clear_href", &data.clear_href);
            render_template(&tera, "products/category.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "category page"),
    }
}

#[get("/nature/{nature_id}/products")]
pub async fn show_nature_products(
    nature_id: web::Path<String>,
    params: web::Query<CatalogQuery>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let nature_id = nature_id.into_inner();
    let mut context = base_context(&flash_messages, "products", &categories);
    let query = CatalogQuery {
        nature_id: None,
        ..params.into_inner()
    };

    match catalog_service::load_nature_listing(
        repo.get_ref(),
        categories.clone().into_inner(),
        server_config.page_size,
        &nature_id,
        query.clone(),
    )
    .await
    {
        Ok(data) => {
            let path = format!("/nature/{nature_id}/products");
            context.insert("nature", &data.nature);
            insert_listing(&mut context, &path, &query, &data.listing);
            render_template(&tera, "products/nature.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "nature listing"),
    }
}
