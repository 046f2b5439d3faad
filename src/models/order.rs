use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::cancellation::Cancellation;
use crate::models::driver::Driver;
use crate::models::recipient::Recipient;
use crate::models::sender::Sender;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Paid,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Paid => "PAID",
            PaymentMethod::CashOnDelivery => "CASH_ON_DELIVERY",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTasks {
    pub age_verification_required: bool,
}

/// Payload for creating an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    pub recipient: Recipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_from_customer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coldbag_needed: Option<bool>,
    pub description: String,
    /// Scheduling slot as the API hands it out. Passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preordered_for: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_tasks: Option<DeliveryTasks>,
}

impl OrderInput {
    /// Minimal creation payload with a generated client order id.
    pub fn new(recipient: Recipient, amount: f64, description: impl Into<String>) -> Self {
        Self {
            client_order_id: Some(Uuid::new_v4().to_string()),
            sender: None,
            recipient,
            payment_method: None,
            amount,
            collect_from_customer: None,
            coldbag_needed: None,
            description: description.into(),
            preordered_for: None,
            delivery_tasks: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(sender) = &self.sender {
            sender.validate()?;
        }
        Ok(())
    }
}

/// Lifecycle label assigned by the remote API. Transition legality is
/// enforced on their side; an unknown literal fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Received,
    WaitingForTransport,
    AssignedToTransport,
    CourierAcceptedDelivery,
    NearVendor,
    PickedUp,
    CourierLeftVendor,
    NearCustomer,
    Delivered,
    Delayed,
    Cancelled,
    ReturnedToVendor,
}

impl OrderStatus {
    /// True once the order can no longer progress.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::ReturnedToVendor
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::WaitingForTransport => "WAITING_FOR_TRANSPORT",
            OrderStatus::AssignedToTransport => "ASSIGNED_TO_TRANSPORT",
            OrderStatus::CourierAcceptedDelivery => "COURIER_ACCEPTED_DELIVERY",
            OrderStatus::NearVendor => "NEAR_VENDOR",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::CourierLeftVendor => "COURIER_LEFT_VENDOR",
            OrderStatus::NearCustomer => "NEAR_CUSTOMER",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Delayed => "DELAYED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::ReturnedToVendor => "RETURNED_TO_VENDOR",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated times as text, exactly as the API formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTimeline {
    pub estimated_pickup_time: String,
    pub estimated_delivery_time: String,
}

/// Full order record as returned by the remote system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub client_order_id: String,
    pub sender: Sender,
    pub recipient: Recipient,
    pub distance: f64,
    pub payment_method: PaymentMethod,
    pub coldbag_needed: bool,
    pub amount: f64,
    pub description: String,
    pub status: OrderStatus,
    pub delivery_fee: f64,
    pub timeline: OrderTimeline,
    pub driver: Driver,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub delivery_tasks: DeliveryTasks,

    // Only populated on the detailed order endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dynamic_pickup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_delivery_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_pickup_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation: Option<Cancellation>,
}

impl Order {
    /// Whether this record came from a detailed order endpoint. Computed
    /// from the optional fields rather than stored, so it never goes stale.
    pub fn is_detailed(&self) -> bool {
        self.tracking_link.is_some()
            || self.proof_of_pickup_url.is_some()
            || self.proof_of_delivery_url.is_some()
            || self.proof_of_return_url.is_some()
            || self.cancellation.is_some()
            || self.is_dynamic_pickup.is_some()
    }
}

/// Location sub-payload for order updates. Coordinates are required; the
/// rest is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderLocationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial order update. Absent fields are left untouched by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<UpdateOrderLocationInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
