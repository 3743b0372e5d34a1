use actix_web::{HttpRequest, Responder, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::category::CategoryCatalog;
use crate::forms::parse_form;
use crate::forms::quote::QuoteForm;
use crate::forms::subscribe::SubscribeForm;
use crate::repository::HttpRepository;
use crate::routes::{back_location, base_context, redirect, render_form_errors};
use crate::services::{ServiceError, leads as leads_service};

#[post("/quote")]
pub async fn submit_quote(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let back = back_location(&req, "/");
    let context = base_context(&flash_messages, "quote", &categories);

    let form = match parse_form::<QuoteForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            return render_form_errors(
                &tera,
                context,
                "leads/quote.html",
                &QuoteForm::default(),
                &err.field_errors(),
            );
        }
    };

    match leads_service::submit_quote(repo.get_ref(), form.clone()).await {
        Ok(()) => {
            FlashMessage::success("Thank you! We will get back to you with a quote shortly.")
                .send();
            redirect(&back)
        }
        Err(ServiceError::Validation(errors)) => {
            render_form_errors(&tera, context, "leads/quote.html", &form, &errors)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to submit the quote request: {err}");
            FlashMessage::error("Failed to submit the quote request. Please try again.").send();
            redirect(&back)
        }
    }
}

#[post("/subscribe")]
pub async fn subscribe(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let back = back_location(&req, "/");
    let context = base_context(&flash_messages, "subscribe", &categories);

    let form = match parse_form::<SubscribeForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            return render_form_errors(
                &tera,
                context,
                "leads/subscribe.html",
                &SubscribeForm::default(),
                &err.field_errors(),
            );
        }
    };

    match leads_service::subscribe(repo.get_ref(), form.clone()).await {
        Ok(()) => {
            FlashMessage::success("Subscribed! Watch your inbox for updates.").send();
            redirect(&back)
        }
        Err(ServiceError::Validation(errors)) => {
            render_form_errors(&tera, context, "leads/subscribe.html", &form, &errors)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to subscribe: {err}");
            FlashMessage::error("Subscription failed. Please try again.").send();
            redirect(&back)
        }
    }
}
