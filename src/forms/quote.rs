//! "Request a Quote" form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::lead::{LeadStatus, NewQuote};
use crate::domain::types::{CityName, CustomerEmail, PersonName, PhoneNumber};
use crate::forms::{FormError, parse_products, validate_indian_mobile};

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data posted by the quote modal.
#[serde(default)]
pub struct QuoteForm {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub customer_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub customer_email: String,
    #[validate(custom(
        function = "validate_indian_mobile",
        message = "Phone must be +91 followed by 10 digits"
    ))]
    pub customer_phone: String,
    #[validate(length(min = 3, message = "City must be at least 3 characters"))]
    pub city: String,
    /// Checked product lines; repeated key.
    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one product"))]
    pub selected_products: Vec<String>,
}

impl TryFrom<QuoteForm> for NewQuote {
    type Error = FormError;

    fn try_from(form: QuoteForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            customer_name: PersonName::new(&form.customer_name)
                .map_err(FormError::field("customer_name"))?,
            customer_email: CustomerEmail::new(form.customer_email.as_str())
                .map_err(FormError::field("customer_email"))?,
            customer_phone: PhoneNumber::indian_mobile(&form.customer_phone)
                .map_err(FormError::field("customer_phone"))?,
            city: CityName::new(&form.city).map_err(FormError::field("city"))?,
            selected_products: parse_products(&form.selected_products)?,
            status: LeadStatus::New,
        })
    }
}
