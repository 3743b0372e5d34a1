//! Footer newsletter form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::lead::NewSubscriber;
use crate::domain::types::CustomerEmail;
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SubscribeForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

impl TryFrom<SubscribeForm> for NewSubscriber {
    type Error = FormError;

    fn try_from(form: SubscribeForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            email: CustomerEmail::new(form.email.as_str()).map_err(FormError::field("email"))?,
        })
    }
}
