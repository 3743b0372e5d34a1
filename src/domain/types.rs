//! Strongly-typed value objects used by domain entities and lead payloads.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, normalized
//! email, sanitized text) so that once a value reaches the domain layer it can
//! be sent to the API without further checks.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is shorter than the required minimum.
    #[error("value must be at least {0} characters")]
    TooShort(usize),
    /// Provided string is longer than the allowed maximum.
    #[error("value must be at most {0} characters")]
    TooLong(usize),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Trims and strips markup from free text submitted through the site forms.
pub fn sanitize_text(value: &str) -> String {
    ammonia::clean(value.trim()).trim().to_string()
}

/// Macro to generate newtypes for opaque API identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier ensuring it is not blank.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the identifier as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PlantId, "Stable API identifier of a plant (top-level category).");
id_newtype!(NatureId, "Stable API identifier of a nature (subcategory).");
id_newtype!(ProductId, "Identifier or slug of a product.");
id_newtype!(BlogSlug, "URL slug of a blog post.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for sanitized text holding at least `MIN` characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShortText<const MIN: usize>(String);

impl<const MIN: usize> ShortText<MIN> {
    /// Sanitizes, trims and enforces the minimum length.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = sanitize_text(value.as_ref());
        if sanitized.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if sanitized.chars().count() < MIN {
            return Err(TypeConstraintError::TooShort(MIN));
        }
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const MIN: usize> Deref for ShortText<MIN> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const MIN: usize> Display for ShortText<MIN> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer, company and city names share the three character minimum.
pub type PersonName = ShortText<3>;
pub type CompanyName = ShortText<3>;
pub type CityName = ShortText<3>;

/// Optional project description sent with an inquiry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 1000;

    /// Sanitizes the text and enforces the 3..=1000 character window.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = sanitize_text(value.as_ref());
        let len = sanitized.chars().count();
        if len < Self::MIN_LEN {
            return Err(TypeConstraintError::TooShort(Self::MIN_LEN));
        }
        if len > Self::MAX_LEN {
            return Err(TypeConstraintError::TooLong(Self::MAX_LEN));
        }
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` when the value is exactly `+91` followed by ten digits.
pub fn is_indian_mobile(value: &str) -> bool {
    value
        .strip_prefix("+91")
        .is_some_and(|rest| rest.len() == 10 && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns `true` when the value holds 10 to 12 digits with an optional leading `+`.
pub fn is_loose_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=12).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Phone number as typed by the customer, validated by one of the form rules.
///
/// Numbers carrying a country code are normalized to E.164; local numbers are
/// kept as typed since the API accepts both.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Accepts only `+91XXXXXXXXXX` numbers (quote requests).
    pub fn indian_mobile<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if !is_indian_mobile(trimmed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(normalize_phone(trimmed)))
    }

    /// Accepts 10 to 12 digits with an optional `+` (inquiries).
    pub fn loose<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if !is_loose_phone(trimmed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(normalize_phone(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize_phone(value: &str) -> String {
    if !value.starts_with('+') {
        return value.to_string();
    }
    match parse(None, value) {
        Ok(parsed) => parsed.format().mode(Mode::E164).to_string(),
        Err(_) => value.to_string(),
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
