#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::HttpRepository;

pub mod catalog;
pub mod content;
pub mod domain;
pub mod forms;
pub mod pagination;
pub mod repository;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every page, form and API handler on an app or scope.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    use crate::routes::api::api_v1_products_feed;
    use crate::routes::blog::{show_blog, show_blog_post};
    use crate::routes::contact::{show_contact, submit_contact};
    use crate::routes::leads::{submit_quote, subscribe};
    use crate::routes::main::{show_about, show_index};
    use crate::routes::plants::show_plant_availability;
    use crate::routes::products::{
        show_category, show_nature_products, show_product, show_products,
    };

    cfg.service(web::scope("/api").service(api_v1_products_feed))
        .service(show_index)
        .service(show_about)
        .service(show_products)
        .service(show_product)
        .service(show_nature_products)
        .service(show_category)
        .service(show_plant_availability)
        .service(show_blog)
        .service(show_blog_post)
        .service(show_contact)
        .service(submit_contact)
        .service(submit_quote)
        .service(subscribe);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = HttpRepository::new(&server_config.api_base_url, server_config.api_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build the API client: {e}")))?;

    let categories = web::Data::new(server_config.category_catalog());

    // Flash messages live in a signed cookie.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(categories.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
