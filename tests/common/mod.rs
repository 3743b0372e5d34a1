//! Loopback stand-in for the catalog API used by the route tests.

use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, web};
use config::{Config, File};
use serde::Deserialize;
use serde_json::{Value, json};

use gajpati_site::models::config::ServerConfig;

pub const BITUMEN_PLANT: &str = "68808208cf8dba209c5a0b1d";
pub const PRODUCT_COUNT: usize = 25;
/// Base URL nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api/v1";

pub fn server_config() -> ServerConfig {
    Config::builder()
        .add_source(File::with_name("config/default"))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

/// Lead bodies posted to the fake API, keyed by endpoint.
#[derive(Default)]
pub struct Received {
    pub leads: Mutex<Vec<(String, Value)>>,
}

impl Received {
    pub fn count(&self) -> usize {
        self.leads.lock().unwrap().len()
    }
}

fn product(index: usize) -> Value {
    json!({
        "_id": format!("p{index}"),
        "name": format!("VG-{index}"),
        "plantId": { "_id": BITUMEN_PLANT, "name": "Bitumen Plant" },
        "natureId": { "_id": "n1", "name": "VG" },
        "images": [
            { "url": "/img/side.jpg", "alt": "side" },
            { "url": "/img/main.jpg", "alt": "main", "isPrimary": true }
        ]
    })
}

fn nature(id: &str, name: &str, application: &str) -> Value {
    json!({ "_id": id, "name": name, "applications": [application] })
}

fn blog(slug: &str, featured: bool) -> Value {
    json!({
        "_id": format!("b-{slug}"),
        "title": format!("Post {slug}"),
        "slug": slug,
        "category": "Technical Guide",
        "featured": featured,
        "content": "## Choosing a grade\nVG-30 suits most highways.\n- Heat\n- Load"
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    plant_id: String,
    nature_id: Option<String>,
    page: Option<usize>,
    limit: Option<usize>,
}

async fn search_products(params: web::Query<SearchParams>) -> HttpResponse {
    let all: Vec<Value> = if params.plant_id == BITUMEN_PLANT
        && params.nature_id.as_deref().is_none_or(|id| id == "n1")
    {
        (1..=PRODUCT_COUNT).map(product).collect()
    } else {
        Vec::new()
    };
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10);
    let products: Vec<Value> = all.iter().skip((page - 1) * limit).take(limit).cloned().collect();
    HttpResponse::Ok().json(json!({ "data": { "products": products, "total": all.len() } }))
}

async fn all_products() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": { "products": [product(1)], "total": 1 } }))
}

async fn get_product(id: web::Path<String>) -> HttpResponse {
    match id.strip_prefix('p').and_then(|n| n.parse::<usize>().ok()) {
        Some(index) if (1..=PRODUCT_COUNT).contains(&index) => {
            HttpResponse::Ok().json(json!({ "data": product(index) }))
        }
        _ => HttpResponse::NotFound().json(json!({ "message": "Product not found" })),
    }
}

async fn search_natures() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": { "natures": [nature("n1", "VG", "Road Construction"), nature("n2", "CRMB", "Waterproofing")] }
    }))
}

async fn get_nature(id: web::Path<String>) -> HttpResponse {
    if id.as_str() == "n1" {
        HttpResponse::Ok().json(json!({ "data": nature("n1", "VG", "Road Construction") }))
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Nature not found" }))
    }
}

async fn plants_with_stats() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": [{
            "_id": BITUMEN_PLANT,
            "name": "Bitumen Plant",
            "totalProductCount": PRODUCT_COUNT,
            "topNatures": [{ "_id": "n1", "name": "VG", "productCount": PRODUCT_COUNT }]
        }]
    }))
}

async fn list_blogs() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": [blog("grades", true), blog("gabions", false)] }))
}

async fn get_blog(slug: web::Path<String>) -> HttpResponse {
    if slug.as_str() == "grades" {
        HttpResponse::Ok().json(json!({ "data": blog("grades", true) }))
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Blog not found" }))
    }
}

async fn create_quote(body: web::Json<Value>, received: web::Data<Received>) -> HttpResponse {
    received
        .leads
        .lock()
        .unwrap()
        .push(("quote".to_string(), body.into_inner()));
    HttpResponse::Created().json(json!({ "data": {} }))
}

async fn subscribe(body: web::Json<Value>, received: web::Data<Received>) -> HttpResponse {
    let body = body.into_inner();
    if body["email"] == "taken@example.com" {
        return HttpResponse::Conflict().json(json!({ "message": "Email already subscribed" }));
    }
    received
        .leads
        .lock()
        .unwrap()
        .push(("subscriber".to_string(), body));
    HttpResponse::Created().json(json!({ "data": {} }))
}

/// Starts the fake API on an ephemeral port and returns its base URL.
pub fn spawn_fake_api(received: web::Data<Received>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(received.clone())
            .service(
                web::scope("/api/v1")
                    .route("/products/search", web::get().to(search_products))
                    .route("/products/allProducts", web::get().to(all_products))
                    .route("/products/{id}", web::get().to(get_product))
                    .route("/natures/search", web::get().to(search_natures))
                    .route("/natures/{id}", web::get().to(get_nature))
                    .route("/plants-with-stats", web::get().to(plants_with_stats))
                    .route("/blogs", web::get().to(list_blogs))
                    .route("/blogs/slug/{slug}", web::get().to(get_blog))
                    .route("/quotes/create", web::post().to(create_quote))
                    .route("/subscribers", web::post().to(subscribe)),
            )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{address}/api/v1")
}
