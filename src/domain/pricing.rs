//! Price range validation against the configured bounds

use crate::domain::errors::{PriceLevel, ValidationError};
use crate::domain::global_config::PricingBounds;
use crate::domain::types::Price;

/// Check a low/high retainer price pair against the accepted bounds.
///
/// The low price is checked first, then the high price, then their order.
pub fn validate_pricing(
    price_low: Price,
    price_high: Price,
    bounds: &PricingBounds,
) -> Result<(), ValidationError> {
    let in_bounds = |price: Price| bounds.min <= price && price <= bounds.max;
    let out_of_range = |level| ValidationError::PriceOutOfRange {
        level,
        min: bounds.min.into_inner(),
        max: bounds.max.into_inner(),
    };

    if !in_bounds(price_low) {
        return Err(out_of_range(PriceLevel::Low));
    }
    if !in_bounds(price_high) {
        return Err(out_of_range(PriceLevel::High));
    }
    if price_high < price_low {
        return Err(ValidationError::PriceRangeInverted);
    }
    Ok(())
}
