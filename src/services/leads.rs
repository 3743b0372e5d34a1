use crate::domain::lead::{NewInquiry, NewQuote, NewSubscriber};
use crate::forms::inquiry::InquiryForm;
use crate::forms::quote::QuoteForm;
use crate::forms::subscribe::SubscribeForm;
use crate::repository::LeadWriter;
use crate::services::{ServiceError, ServiceResult};

/// Validates the quote form and forwards it to the API.
pub async fn submit_quote<R>(repo: &R, form: QuoteForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let quote = NewQuote::try_from(form).map_err(|err| {
        log::info!("Rejected quote form: {err}");
        ServiceError::from(err)
    })?;

    repo.create_quote(&quote).await.map_err(|err| {
        log::error!("Failed to create quote: {err}");
        err
    })?;

    log::info!("Quote request submitted for {}", quote.city);
    Ok(())
}

/// Validates the contact form and forwards it to the API.
pub async fn submit_inquiry<R>(repo: &R, form: InquiryForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let inquiry = NewInquiry::try_from(form).map_err(|err| {
        log::info!("Rejected inquiry form: {err}");
        ServiceError::from(err)
    })?;

    repo.create_inquiry(&inquiry).await.map_err(|err| {
        log::error!("Failed to create inquiry: {err}");
        err
    })?;

    Ok(())
}

/// Validates the newsletter form and subscribes the address.
pub async fn subscribe<R>(repo: &R, form: SubscribeForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let subscriber = NewSubscriber::try_from(form).map_err(ServiceError::from)?;

    repo.subscribe(&subscriber).await.map_err(|err| {
        log::error!("Failed to subscribe: {err}");
        err
    })?;

    Ok(())
}
