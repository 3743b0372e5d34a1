use crate::dto::plants::{PlantAvailabilityData, PlantStock, StockRow};
use crate::repository::PlantReader;
use crate::services::ServiceResult;

/// Selector value that shows every plant.
pub const ALL_PLANTS: &str = "all";

/// Loads stock per plant, optionally narrowed to one plant by id or slug.
pub async fn load_plant_availability<R>(
    repo: &R,
    plant: Option<&str>,
) -> ServiceResult<PlantAvailabilityData>
where
    R: PlantReader + ?Sized,
{
    let plants = repo.list_plants_with_products().await.map_err(|err| {
        log::error!("Failed to load plant availability: {err}");
        err
    })?;

    let selected = plant
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ALL_PLANTS)
        .to_string();

    let options = plants
        .iter()
        .map(|plant| (plant.id.clone(), plant.name.clone()))
        .collect();

    let plants = plants
        .into_iter()
        .filter(|plant| {
            selected == ALL_PLANTS
                || plant.id == selected
                || plant.slug.as_deref() == Some(selected.as_str())
        })
        .map(|plant| PlantStock {
            rows: plant
                .products
                .iter()
                .map(|product| StockRow {
                    status: product.stock_status(),
                    product: product.clone(),
                })
                .collect(),
            plant,
        })
        .collect();

    Ok(PlantAvailabilityData {
        plants,
        options,
        selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::{Plant, PlantProduct, StockStatus};
    use crate::repository::fake::FakeRepository;

    fn plant(id: &str, slug: &str, statuses: &[&str]) -> Plant {
        Plant {
            id: id.to_string(),
            name: format!("{id} plant"),
            slug: Some(slug.to_string()),
            products: statuses
                .iter()
                .map(|status| PlantProduct {
                    name: format!("{id} {status}"),
                    status: status.to_string(),
                    quantity: "10 MT".to_string(),
                })
                .collect(),
            ..Plant::default()
        }
    }

    fn repo() -> FakeRepository {
        FakeRepository {
            plants: vec![
                plant("p1", "cuttack", &["In Stock", "Out of Stock"]),
                plant("p2", "puri", &["Limited"]),
            ],
            ..FakeRepository::default()
        }
    }

    #[actix_web::test]
    async fn shows_all_plants_by_default() {
        let data = load_plant_availability(&repo(), None).await.unwrap();
        assert_eq!(data.selected, ALL_PLANTS);
        assert_eq!(data.plants.len(), 2);
        assert_eq!(data.options.len(), 2);
        assert_eq!(data.plants[0].rows[1].status, StockStatus::OutOfStock);
    }

    #[actix_web::test]
    async fn filters_by_id_or_slug() {
        let data = load_plant_availability(&repo(), Some("puri")).await.unwrap();
        assert_eq!(data.plants.len(), 1);
        assert_eq!(data.plants[0].rows[0].status, StockStatus::Limited);
        assert_eq!(data.options.len(), 2);

        let data = load_plant_availability(&repo(), Some("p1")).await.unwrap();
        assert_eq!(data.plants[0].plant.id, "p1");
    }
}
