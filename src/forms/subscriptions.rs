use serde::Deserialize;
use validator::Validate;

use crate::domain::subscription::{NewSubscription, UpdateSubscription};

/// Form data shared by the create and edit subscription pages.
///
/// Parsed with `serde_html_form` because `features` arrives as repeated
/// form fields.
#[derive(Deserialize, Validate)]
pub struct SaveSubscriptionForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub price: String,
    #[serde(default)]
    pub billing_period: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl SaveSubscriptionForm {
    /// At least one non-blank feature line is required.
    pub fn has_features(&self) -> bool {
        self.features.iter().any(|f| !f.trim().is_empty())
    }

    pub fn to_new_subscription(&self) -> NewSubscription {
        NewSubscription::new(
            self.name.clone(),
            self.price.clone(),
            self.billing_period.clone(),
            self.features.clone(),
        )
    }

    pub fn to_update_subscription(&self) -> UpdateSubscription {
        UpdateSubscription::new(
            self.name.clone(),
            self.price.clone(),
            self.billing_period.clone(),
            self.features.clone(),
        )
    }
}
