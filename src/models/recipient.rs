use serde::{Deserialize, Serialize};

use crate::models::location::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub phone_number: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
