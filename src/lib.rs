//! Request/response data models for the pandago last-mile delivery API.
//!
//! Typed payloads for order creation, tracking, cancellation and partial
//! updates, with the handful of cross-field rules the API enforces checked
//! locally before a request is sent. Transport, authentication and retries
//! belong to the caller.

pub mod error;
pub mod models;

pub use error::ValidationError;
pub use models::cancellation::{
    Cancellation, CancellationReason, CancellationSource, OrderCancellationInput,
};
pub use models::driver::Driver;
pub use models::location::Location;
pub use models::order::{
    DeliveryTasks, Order, OrderInput, OrderStatus, OrderTimeline, PaymentMethod, UpdateOrderInput,
    UpdateOrderLocationInput,
};
pub use models::recipient::Recipient;
pub use models::sender::Sender;
