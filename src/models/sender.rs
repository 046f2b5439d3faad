use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::location::Location;

/// Pickup party for an order. The API identifies a sender either by a
/// registered vendor reference or by full contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_vendor_id: Option<String>,
}

impl Sender {
    /// Sender identified by a registered vendor reference only.
    pub fn from_vendor(client_vendor_id: impl Into<String>) -> Self {
        Self {
            name: None,
            phone_number: None,
            location: None,
            notes: None,
            client_vendor_id: Some(client_vendor_id.into()),
        }
    }

    /// Sender identified by full contact details.
    pub fn from_contact(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            name: Some(name.into()),
            phone_number: Some(phone_number.into()),
            location: Some(location),
            notes: None,
            client_vendor_id: None,
        }
    }

    /// Without a `client_vendor_id`, name, phone number and location must
    /// all be present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_vendor_id.is_some() {
            return Ok(());
        }

        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.phone_number.is_none() {
            missing.push("phone_number");
        }
        if self.location.is_none() {
            missing.push("location");
        }

        if missing.is_empty() {
            return Ok(());
        }

        tracing::debug!(missing = ?missing, "sender rejected");
        Err(ValidationError::new(
            "sender",
            format!(
                "either client_vendor_id or name, phone_number and location must be provided (missing: {})",
                missing.join(", ")
            ),
        ))
    }
}
