use std::time::Duration;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use serde_json::Value;
use tera::Tera;

use gajpati_site::configure;
use gajpati_site::repository::HttpRepository;
use gajpati_site::routes::alert_level_to_str;

mod common;

use common::{PRODUCT_COUNT, Received, UNREACHABLE_API, server_config, spawn_fake_api};

macro_rules! site {
    ($api:expr) => {{
        let config = server_config();
        let repo = HttpRepository::new($api, Duration::from_secs(5)).unwrap();
        let tera = Tera::new(&config.templates_dir).unwrap();
        let store = CookieMessageStore::builder(Key::from(config.secret.as_bytes())).build();
        test::init_service(
            App::new()
                .wrap(FlashMessagesFramework::builder(store).build())
                .configure(configure)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(config.category_catalog()))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn about_page_renders() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get().uri("/about").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("About Gajpati"));
}

#[actix_web::test]
async fn home_survives_unreachable_api() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        body_text(resp)
            .await
            .contains("Plant information is currently unavailable.")
    );
}

#[actix_web::test]
async fn home_lists_plants_and_flagship() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Bitumen Plant"));
    assert!(body.contains("/product/p1"));
}

#[actix_web::test]
async fn unknown_category_renders_not_found() {
    let app = site!(UNREACHABLE_API);

    for uri in ["/nature/asphalt", "/products?categoryId=asphalt"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn products_without_category_show_overview() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get().uri("/products").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Bitumen Solutions"));
    assert!(body.contains("Gabion Structures"));
}

#[actix_web::test]
async fn listing_accumulates_pages_and_links_the_next() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get()
        .uri("/products?categoryId=bitumen&page=2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(">VG-1<"));
    assert!(body.contains(">VG-20<"));
    assert!(!body.contains(">VG-21<"));
    assert!(body.contains(&format!("{PRODUCT_COUNT} products")));
    assert!(body.contains("page=3"));
}

#[actix_web::test]
async fn exhausted_listing_has_no_load_more() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get()
        .uri("/products?categoryId=bitumen&page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = body_text(resp).await;
    assert!(body.contains(">VG-25<"));
    assert!(!body.contains("Load more"));
}

#[actix_web::test]
async fn listing_failure_offers_retry() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get()
        .uri("/products?categoryId=bitumen")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Retry"));
    assert!(!body.contains("Load more"));
}

#[actix_web::test]
async fn feed_returns_exactly_one_page() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get()
        .uri("/api/v1/products/feed?categoryId=bitumen&page=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["products"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], PRODUCT_COUNT);
    assert_eq!(body["page"], 3);
    assert_eq!(body["has_more"], false);
}

#[actix_web::test]
async fn feed_reports_upstream_failure() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get()
        .uri("/api/v1/products/feed?categoryId=bitumen")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn scroll_script_offers_inline_retry_on_feed_failure() {
    let app = test::init_service(App::new().service(Files::new("/assets", "./assets"))).await;

    let req = test::TestRequest::get().uri("/assets/catalog.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let script = body_text(resp).await;

    assert!(script.contains("alert alert-danger"));
    assert!(script.contains("\"Retry\""));
    assert!(script.contains("body.message"));
    assert!(script.contains("root.insertBefore(alertBox, sentinel)"));
    assert!(script.contains("observer.observe(sentinel)"));
}

#[actix_web::test]
async fn category_page_applies_facets() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get().uri("/nature/bitumen").to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Showing 2 of 2 types"));

    let req = test::TestRequest::get()
        .uri("/nature/bitumen?facet=Grade+Type%3ACRMB")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Showing 1 of 2 types"));
    assert!(body.contains("/nature/n2/products"));
    assert!(!body.contains("/nature/n1/products"));
}

#[actix_web::test]
async fn nature_listing_and_missing_nature() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get()
        .uri("/nature/n1/products?categoryId=bitumen")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(">VG-10<"));
    assert!(body.contains("products?categoryId=bitumen&amp;page=2"));

    let req = test::TestRequest::get().uri("/nature/n9/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn product_detail_orders_gallery() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get()
        .uri("/product/p3?categoryId=bitumen")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    let main = body.find("main.jpg").unwrap();
    let side = body.find("side.jpg").unwrap();
    assert!(main < side);

    let req = test::TestRequest::get().uri("/product/p99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blog_post_renders_body_and_missing_post_is_not_found() {
    let api = spawn_fake_api(web::Data::new(Received::default()));
    let app = site!(&api);

    let req = test::TestRequest::get().uri("/blog/grades").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<h2>Choosing&#32;a&#32;grade</h2>"));
    assert!(body.contains("<li>Heat</li>"));

    let req = test::TestRequest::get().uri("/blog/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn contact_page_renders_form() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::get().uri("/contact").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("name=\"consent\""));
}

#[actix_web::test]
async fn invalid_quote_is_rerendered_without_calling_api() {
    let received = web::Data::new(Received::default());
    let api = spawn_fake_api(received.clone());
    let app = site!(&api);

    let req = test::TestRequest::post()
        .uri("/quote")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("customer_name=Asha+Rao&customer_email=asha%40example.com&customer_phone=12345&city=Puri")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(resp).await;
    assert!(body.contains("Phone must be +91 followed by 10 digits"));
    assert!(body.contains("Select at least one product"));
    assert!(body.contains("value=\"Asha Rao\""));
    assert_eq!(received.count(), 0);
}

#[actix_web::test]
async fn valid_quote_is_forwarded_and_redirects_back() {
    let received = web::Data::new(Received::default());
    let api = spawn_fake_api(received.clone());
    let app = site!(&api);

    let req = test::TestRequest::post()
        .uri("/quote")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .insert_header((header::REFERER, "/products?categoryId=gabion"))
        .set_payload(
            "customer_name=Asha+Rao&customer_email=asha%40example.com\
             &customer_phone=%2B919528355555&city=Cuttack\
             &selected_products=Bitumen&selected_products=Gabion",
        )
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products?categoryId=gabion"
    );

    let leads = received.leads.lock().unwrap();
    assert_eq!(leads.len(), 1);
    let (endpoint, body) = &leads[0];
    assert_eq!(endpoint, "quote");
    assert_eq!(body["status"], "New");
    assert_eq!(body["selectedProducts"][1], "Gabion");
}

#[actix_web::test]
async fn rejected_subscription_redirects_with_flash() {
    let received = web::Data::new(Received::default());
    let api = spawn_fake_api(received.clone());
    let app = site!(&api);

    let req = test::TestRequest::post()
        .uri("/subscribe")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("email=taken%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    assert!(resp.headers().contains_key(header::SET_COOKIE));
    assert_eq!(received.count(), 0);
}

#[actix_web::test]
async fn invalid_subscription_is_unprocessable() {
    let app = site!(UNREACHABLE_API);

    let req = test::TestRequest::post()
        .uri("/subscribe")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("email=not-an-email")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("Enter a valid email address"));
}
