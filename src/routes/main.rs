use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::category::CategoryCatalog;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_home_page(repo.get_ref(), &categories).await;

    let mut context = base_context(&flash_messages, "index", &categories);
    context.insert("plants", &data.plants);
    context.insert("flagship", &data.flagship);

    render_template(&tera, "main/index.html", &context)
}

#[get("/about")]
pub async fn show_about(
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "about", &categories);
    render_template(&tera, "main/about.html", &context)
}
