//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use reqwest::Url;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::category::CategoryCatalog;
use crate::domain::lead::{ProductLine, Purpose};
use crate::forms::FieldErrors;
use crate::services::ServiceError;

pub mod api;
pub mod blog;
pub mod contact;
pub mod leads;
pub mod main;
pub mod plants;
pub mod products;

/// Maps a flash message level to the CSS alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context every page starts from: flash alerts, navigation and the option
/// lists used by the quote modal and footer forms.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    categories: &CategoryCatalog,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("categories", categories.all());
    context.insert(
        "product_lines",
        &ProductLine::ALL.map(ProductLine::as_str),
    );
    context.insert("purposes", &Purpose::ALL.map(Purpose::as_str));
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::OK, template, context)
}

pub fn render_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn not_found(tera: &Tera, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::NOT_FOUND, "errors/404.html", context)
}

/// Response for a failed page load: the 404 page or a bare 500.
pub fn page_error(tera: &Tera, context: &Context, err: ServiceError, what: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => not_found(tera, context),
        err => {
            log::error!("Failed to load {what}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Re-renders a form page with the submitted values and field messages.
pub fn render_form_errors<T: Serialize>(
    tera: &Tera,
    mut context: Context,
    template: &str,
    form: &T,
    errors: &FieldErrors,
) -> HttpResponse {
    context.insert("form", form);
    context.insert("errors", errors);
    render_with_status(tera, StatusCode::UNPROCESSABLE_ENTITY, template, &context)
}

/// Same-site path of the page that posted a form, or `fallback`.
pub fn back_location(req: &HttpRequest, fallback: &str) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| local_path(referer, req.connection_info().host()))
        .unwrap_or_else(|| fallback.to_string())
}

fn local_path(referer: &str, host: &str) -> Option<String> {
    if referer.starts_with('/') && !referer.starts_with("//") {
        return Some(referer.to_string());
    }
    let url = Url::parse(referer).ok()?;
    let authority = match url.port() {
        Some(port) => format!("{}:{port}", url.host_str()?),
        None => url.host_str()?.to_string(),
    };
    if authority != host {
        return None;
    }
    Some(match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_keeps_same_site_referers_only() {
        assert_eq!(
            local_path("http://localhost:8080/blog?page=2", "localhost:8080").as_deref(),
            Some("/blog?page=2")
        );
        assert_eq!(local_path("/contact", "example.com").as_deref(), Some("/contact"));
        assert_eq!(local_path("https://evil.test/phish", "example.com"), None);
        assert_eq!(local_path("//evil.test/phish", "example.com"), None);
        assert_eq!(local_path("not a url", "example.com"), None);
    }
}
