use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::domain::category::CategoryCatalog;
use crate::repository::HttpRepository;
use crate::routes::{base_context, page_error, render_template};
use crate::services::blog as blog_service;

#[derive(Deserialize)]
struct BlogQueryParams {
    category: Option<String>,
    page: Option<usize>,
}

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQueryParams>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "blog", &categories);

    match blog_service::load_blog_index(repo.get_ref(), params.category.as_deref(), params.page)
        .await
    {
        Ok(data) => {
            context.insert("featured", &data.featured);
            context.insert("posts", &data.posts);
            context.insert("blog_categories", &data.categories);
            context.insert("selected_category", data.selected_category);
            render_template(&tera, "blog/index.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "blog index"),
    }
}

#[get("/blog/{slug}")]
pub async fn show_blog_post(
    slug: web::Path<String>,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "blog", &categories);

    match blog_service::load_blog_post(repo.get_ref(), &slug).await {
        Ok(data) => {
            context.insert("post", &data.post);
            context.insert("body_html", &data.body_html);
            context.insert("related", &data.related);
            render_template(&tera, "blog/post.html", &context)
        }
        Err(err) => page_error(&tera, &context, err, "blog post"),
    }
}
