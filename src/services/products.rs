use crate::domain::category::CategoryCatalog;
use crate::domain::types::ProductId;
use crate::dto::products::ProductPageData;
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the product detail page.
///
/// The breadcrumb category comes from `category`, falling back to the first
/// configured category.
pub async fn load_product_page<R>(
    repo: &R,
    categories: &CategoryCatalog,
    product_id: &str,
    category: Option<&str>,
) -> ServiceResult<ProductPageData>
where
    R: ProductReader + ?Sized,
{
    let id = ProductId::new(product_id).map_err(|_| ServiceError::NotFound)?;
    let product = repo.get_product(&id).await.map_err(|err| {
        log::error!("Failed to load product {product_id}: {err}");
        err
    })?;

    let category = category
        .and_then(|raw| categories.find(raw))
        .or_else(|| categories.first())
        .cloned();

    Ok(ProductPageData {
        gallery: product.gallery(),
        product,
        category,
    })
}
