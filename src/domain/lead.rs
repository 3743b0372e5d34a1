//! Payloads sent to the lead-capture endpoints.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CityName, CompanyName, CustomerEmail, Description, PersonName, PhoneNumber,
    TypeConstraintError,
};

/// Product lines a customer can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLine {
    Bitumen,
    Gabion,
    Construct,
}

impl ProductLine {
    pub const ALL: [ProductLine; 3] = [Self::Bitumen, Self::Gabion, Self::Construct];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bitumen => "Bitumen",
            Self::Gabion => "Gabion",
            Self::Construct => "Construct",
        }
    }
}

impl FromStr for ProductLine {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|line| line.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown product `{s}`")))
    }
}

/// Purpose of an inquiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Tender,
    #[serde(rename = "Site Use")]
    SiteUse,
    Resale,
    Other,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [Self::Tender, Self::SiteUse, Self::Resale, Self::Other];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tender => "Tender",
            Self::SiteUse => "Site Use",
            Self::Resale => "Resale",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Purpose {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown purpose `{s}`")))
    }
}

/// Lifecycle status the site always submits new leads with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LeadStatus {
    #[default]
    New,
}

/// Body of `POST /quotes/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub customer_name: PersonName,
    pub customer_email: CustomerEmail,
    pub customer_phone: PhoneNumber,
    pub city: CityName,
    pub selected_products: Vec<ProductLine>,
    pub status: LeadStatus,
}

/// Body of `POST /inquires/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub customer_name: PersonName,
    pub customer_email: CustomerEmail,
    pub customer_phone: PhoneNumber,
    pub company_name: CompanyName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub city: CityName,
    pub purpose: Purpose,
    pub consent: bool,
    pub selected_products: Vec<ProductLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    pub status: LeadStatus,
}

/// Body of `POST /subscribers`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSubscriber {
    pub email: CustomerEmail,
}
