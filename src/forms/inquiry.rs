//! Contact page inquiry form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::lead::{LeadStatus, NewInquiry, Purpose};
use crate::domain::types::{
    CityName, CompanyName, CustomerEmail, Description, PersonName, PhoneNumber, TypeConstraintError,
    sanitize_text,
};
use crate::forms::{FormError, empty_as_none, parse_products, validate_loose_phone};

fn validate_purpose(value: &str) -> Result<(), validator::ValidationError> {
    value
        .parse::<Purpose>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("purpose"))
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data posted by `/contact`.
#[serde(default)]
pub struct InquiryForm {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub customer_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub customer_email: String,
    #[validate(custom(
        function = "validate_loose_phone",
        message = "Phone must have 10 to 12 digits"
    ))]
    pub customer_phone: String,
    #[validate(length(min = 3, message = "Company name must be at least 3 characters"))]
    pub company_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub designation: Option<String>,
    #[validate(length(min = 3, message = "City must be at least 3 characters"))]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "validate_purpose", message = "Select a purpose"))]
    pub purpose: String,
    /// Checkbox value; present only when ticked.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Consent is required"))]
    pub consent: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one product"))]
    pub selected_products: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(
        min = 3,
        max = 1000,
        message = "Description must be between 3 and 1000 characters"
    ))]
    pub description: Option<String>,
}

impl TryFrom<InquiryForm> for NewInquiry {
    type Error = FormError;

    fn try_from(form: InquiryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let description = form
            .description
            .as_deref()
            .map(Description::new)
            .transpose()
            .map_err(FormError::field("description"))?;

        Ok(Self {
            customer_name: PersonName::new(&form.customer_name)
                .map_err(FormError::field("customer_name"))?,
            customer_email: CustomerEmail::new(form.customer_email.as_str())
                .map_err(FormError::field("customer_email"))?,
            customer_phone: PhoneNumber::loose(&form.customer_phone)
                .map_err(FormError::field("customer_phone"))?,
            company_name: CompanyName::new(&form.company_name)
                .map_err(FormError::field("company_name"))?,
            designation: form
                .designation
                .as_deref()
                .map(sanitize_text)
                .filter(|designation| !designation.is_empty()),
            city: CityName::new(&form.city).map_err(FormError::field("city"))?,
            purpose: form.purpose.parse().map_err(FormError::field("purpose"))?,
            consent: match form.consent {
                Some(_) => true,
                None => {
                    return Err(FormError::Field {
                        field: "consent",
                        source: TypeConstraintError::EmptyString,
                    });
                }
            },
            selected_products: parse_products(&form.selected_products)?,
            description,
            status: LeadStatus::New,
        })
    }
}
