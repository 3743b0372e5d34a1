use crate::domain::category::CategoryCatalog;
use crate::dto::main::HomePageData;
use crate::repository::{PlantReader, ProductReader};

/// Size of the product pool flagship products are picked from.
pub const FLAGSHIP_POOL: usize = 20;

/// Loads the home page sections. A failing section renders empty.
pub async fn load_home_page<R>(repo: &R, categories: &CategoryCatalog) -> HomePageData
where
    R: PlantReader + ProductReader + ?Sized,
{
    let plants = match repo.list_plants_with_stats().await {
        Ok(mut plants) => {
            plants.sort_by_key(|plant| categories.plant_rank(&plant.id));
            plants
        }
        Err(err) => {
            log::error!("Failed to load plants: {err}");
            Vec::new()
        }
    };

    let flagship = match repo.list_products(FLAGSHIP_POOL).await {
        Ok(products) => categories
            .all()
            .iter()
            .filter_map(|category| {
                products
                    .iter()
                    .find(|product| product.plant_id() == Some(category.plant_id.as_str()))
                    .cloned()
            })
            .collect(),
        Err(err) => {
            log::error!("Failed to load flagship products: {err}");
            Vec::new()
        }
    };

    HomePageData { plants, flagship }
}
