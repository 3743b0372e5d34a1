use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::domain::category::CategoryCatalog;
use crate::repository::HttpRepository;
use crate::routes::{base_context, page_error, render_template};
use crate::services::plants as plants_service;

#[derive(Deserialize)]
struct AvailabilityQueryParams {
    plant: Option<String>,
}

#[get("/plant-availability")]
pub async fn show_plant_availability(
    params: web::Query<AvailabilityQueryParams>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "plant_availability", &categories);

    match plants_service::load_plant_availability(repo.get_ref(), params.plant.as_deref()).await {
        Ok(data) => {
            context.insert("plants", &data.plants);
            context.insert("options", &data.options);
            context.insert("selected", &data.selected);
            render_template(&tera, "plants/availability.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "plant availability"),
    }
}
