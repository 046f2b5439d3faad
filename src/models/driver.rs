use serde::{Deserialize, Serialize};

/// Courier attached to an order by the logistics side. Read-only for
/// clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone_number: String,
}
