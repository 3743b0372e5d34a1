use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::domain::category::CategoryCatalog;
use crate::dto::catalog::CatalogQuery;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::services::catalog as catalog_service;

/// One catalog page for the infinite-scroll script.
#[get("/v1/products/feed")]
pub async fn api_v1_products_feed(
    params: web::Query<CatalogQuery>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match catalog_service::load_feed_page(
        repo.get_ref(),
        &categories,
        server_config.page_size,
        &params,
    )
    .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => HttpResponse::BadGateway().json(json!({ "message": err.to_string() })),
    }
}
