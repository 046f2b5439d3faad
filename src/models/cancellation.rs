use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationSource {
    Client,
    Logistics,
}

/// Every reason the API may report on a cancelled order. Only a subset is
/// accepted when the client itself requests a cancellation, see
/// [`OrderCancellationInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationReason {
    AddressIncompleteMisstated,
    BadWeather,
    Closed,
    CourierAccident,
    CourierUnreachable,
    DeliveryEtaTooLong,
    DuplicateOrder,
    FoodQualitySpillage,
    LateDelivery,
    MistakeError,
    NoCourier,
    OutsideDeliveryArea,
    OutsideServiceHours,
    ReasonUnknown,
    TechnicalProblem,
    UnableToFind,
    UnableToPay,
    WrongOrderItemsDelivered,
}

impl CancellationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationReason::AddressIncompleteMisstated => "ADDRESS_INCOMPLETE_MISSTATED",
            CancellationReason::BadWeather => "BAD_WEATHER",
            CancellationReason::Closed => "CLOSED",
            CancellationReason::CourierAccident => "COURIER_ACCIDENT",
            CancellationReason::CourierUnreachable => "COURIER_UNREACHABLE",
            CancellationReason::DeliveryEtaTooLong => "DELIVERY_ETA_TOO_LONG",
            CancellationReason::DuplicateOrder => "DUPLICATE_ORDER",
            CancellationReason::FoodQualitySpillage => "FOOD_QUALITY_SPILLAGE",
            CancellationReason::LateDelivery => "LATE_DELIVERY",
            CancellationReason::MistakeError => "MISTAKE_ERROR",
            CancellationReason::NoCourier => "NO_COURIER",
            CancellationReason::OutsideDeliveryArea => "OUTSIDE_DELIVERY_AREA",
            CancellationReason::OutsideServiceHours => "OUTSIDE_SERVICE_HOURS",
            CancellationReason::ReasonUnknown => "REASON_UNKNOWN",
            CancellationReason::TechnicalProblem => "TECHNICAL_PROBLEM",
            CancellationReason::UnableToFind => "UNABLE_TO_FIND",
            CancellationReason::UnableToPay => "UNABLE_TO_PAY",
            CancellationReason::WrongOrderItemsDelivered => "WRONG_ORDER_ITEMS_DELIVERED",
        }
    }
}

impl std::fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why and by whom an order was cancelled, as reported on detailed order
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancellation {
    pub source: CancellationSource,
    pub reason: CancellationReason,
}

/// Payload for cancelling an order. The cancel endpoint accepts only three
/// of the reasons above; everything else is rejected upfront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancellationInput {
    pub reason: CancellationReason,
}

impl OrderCancellationInput {
    pub const ALLOWED_REASONS: [CancellationReason; 3] = [
        CancellationReason::DeliveryEtaTooLong,
        CancellationReason::MistakeError,
        CancellationReason::ReasonUnknown,
    ];

    pub fn new(reason: CancellationReason) -> Result<Self, ValidationError> {
        let input = Self { reason };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if Self::ALLOWED_REASONS.contains(&self.reason) {
            return Ok(());
        }

        tracing::debug!(reason = %self.reason, "cancellation reason rejected");
        Err(ValidationError::new(
            "reason",
            format!(
                "{} is not accepted for client cancellations, see \
                 https://pandago.docs.apiary.io/#reference/orders/operation/cancel-specific-order",
                self.reason
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{CancellationReason, OrderCancellationInput};

    #[test]
    fn the_three_allowed_reasons_pass() {
        for reason in OrderCancellationInput::ALLOWED_REASONS {
            assert!(OrderCancellationInput::new(reason).is_ok());
        }
    }

    #[test]
    fn every_other_reason_is_rejected() {
        let rejected = [
            CancellationReason::AddressIncompleteMisstated,
            CancellationReason::BadWeather,
            CancellationReason::Closed,
            CancellationReason::CourierAccident,
            CancellationReason::CourierUnreachable,
            CancellationReason::DuplicateOrder,
            CancellationReason::FoodQualitySpillage,
            CancellationReason::LateDelivery,
            CancellationReason::NoCourier,
            CancellationReason::OutsideDeliveryArea,
            CancellationReason::OutsideServiceHours,
            CancellationReason::TechnicalProblem,
            CancellationReason::UnableToFind,
            CancellationReason::UnableToPay,
            CancellationReason::WrongOrderItemsDelivered,
        ];

        for reason in rejected {
            let err = OrderCancellationInput::new(reason.clone()).unwrap_err();
            assert_eq!(err.field, "reason");
            assert!(err.message.contains(reason.as_str()));
        }
    }

    #[test]
    fn validate_matches_the_constructor() {
        let input = OrderCancellationInput {
            reason: CancellationReason::BadWeather,
        };
        assert!(input.validate().is_err());

        let input = OrderCancellationInput {
            reason: CancellationReason::MistakeError,
        };
        assert!(input.validate().is_ok());
    }
}
