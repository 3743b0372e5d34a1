use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::category::CategoryCatalog;
use crate::forms::inquiry::InquiryForm;
use crate::forms::{FieldErrors, parse_form};
use crate::repository::HttpRepository;
use crate::routes::{back_location, base_context, redirect, render_form_errors, render_template};
use crate::services::{ServiceError, leads as leads_service};

#[get("/contact")]
pub async fn show_contact(
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "contact", &categories);
    context.insert("form", &InquiryForm::default());
    context.insert("errors", &FieldErrors::new());
    render_template(&tera, "contact/index.html", &context)
}

#[post("/contact")]
pub async fn submit_contact(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    categories: web::Data<CategoryCatalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let back = back_location(&req, "/contact");
    let context = base_context(&flash_messages, "contact", &categories);

    let form = match parse_form::<InquiryForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            return render_form_errors(
                &tera,
                context,
                "contact/index.html",
                &InquiryForm::default(),
                &err.field_errors(),
            );
        }
    };

    match leads_service::submit_inquiry(repo.get_ref(), form.clone()).await {
        Ok(()) => {
            FlashMessage::success("Thank you for reaching out. Our team will contact you soon.")
                .send();
            redirect(&back)
        }
        Err(ServiceError::Validation(errors)) => {
            render_form_errors(&tera, context, "contact/index.html", &form, &errors)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to submit the inquiry: {err}");
            FlashMessage::error("Failed to send your inquiry. Please try again.").send();
            redirect(&back)
        }
    }
}
