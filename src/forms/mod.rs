//! Lead-capture forms submitted from the public site.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::lead::ProductLine;
use crate::domain::types::{TypeConstraintError, is_indian_mobile, is_loose_phone};

pub mod inquiry;
pub mod quote;
pub mod subscribe;

/// Human readable messages keyed by form field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form body: {0}")]
    Malformed(String),

    #[error("invalid {field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: TypeConstraintError,
    },
}

impl FormError {
    pub fn field(field: &'static str) -> impl FnOnce(TypeConstraintError) -> Self {
        move |source| Self::Field { field, source }
    }

    /// Flattens the error into per-field messages for re-rendering the form.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            FormError::Validation(errors) => field_errors(errors),
            FormError::Malformed(message) => {
                BTreeMap::from([("form".to_string(), vec![message.clone()])])
            }
            FormError::Field { field, source } => {
                BTreeMap::from([(field.to_string(), vec![capitalize(&source.to_string())])])
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collects `validator` messages, falling back to the rule code.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Decodes an `application/x-www-form-urlencoded` body, keeping repeated
/// keys (checkbox groups) as sequences.
pub fn parse_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, FormError> {
    serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))
}

/// Treats blank optional inputs as absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn validate_indian_mobile(value: &str) -> Result<(), validator::ValidationError> {
    if is_indian_mobile(value.trim()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("indian_mobile"))
    }
}

pub(crate) fn validate_loose_phone(value: &str) -> Result<(), validator::ValidationError> {
    if is_loose_phone(value.trim()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("phone"))
    }
}

/// Parses checked product lines; at least one is required.
pub(crate) fn parse_products(raw: &[String]) -> Result<Vec<ProductLine>, FormError> {
    let mut products = Vec::new();
    for value in raw {
        let product = value
            .parse::<ProductLine>()
            .map_err(FormError::field("selected_products"))?;
        if !products.contains(&product) {
            products.push(product);
        }
    }
    if products.is_empty() {
        return Err(FormError::Field {
            field: "selected_products",
            source: TypeConstraintError::EmptyString,
        });
    }
    Ok(products)
}
