pub mod cancellation;
pub mod driver;
pub mod location;
pub mod order;
pub mod recipient;
pub mod sender;
