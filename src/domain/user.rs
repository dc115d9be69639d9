use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Searchable;

/// An end user of the carpool app as shown on the earnings listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppUser {
    pub id: i32,
    /// Display identifier shown in the "Sl no." column, e.g. `#BI00001`.
    pub sl_no: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub country: String,
    pub profile_image: Option<String>,
    /// Whether the user has been granted premium access.
    pub premium: bool,
    pub created_at: NaiveDateTime,
}

impl Searchable for AppUser {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.contact_number]
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAppUser {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub country: String,
    pub profile_image: Option<String>,
}

impl NewAppUser {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        contact_number: String,
        country: String,
        profile_image: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            contact_number: contact_number.trim().to_string(),
            country: country.trim().to_string(),
            profile_image: profile_image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
