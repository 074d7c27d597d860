//! Outreach volume bounds relative to the addressable market

use crate::domain::types::{BusinessCount, ProspectVolume, TouchesPerBusiness};

fn addressable_volume(business_count: BusinessCount, max_touches: TouchesPerBusiness) -> u64 {
    business_count
        .into_inner()
        .saturating_mul(max_touches.into_inner())
}

/// Largest selectable monthly volume: the addressable market times the
/// allowed touches, capped at `max_default`
pub fn max_volume(
    business_count: BusinessCount,
    max_touches: TouchesPerBusiness,
    max_default: u64,
) -> ProspectVolume {
    ProspectVolume::new(max_default.min(addressable_volume(business_count, max_touches)))
}

/// Whether the requested volume fits inside the addressable market.
///
/// Advisory only: callers warn on `false` but still run the estimate.
pub fn is_within_tam(
    requested: ProspectVolume,
    business_count: BusinessCount,
    max_touches: TouchesPerBusiness,
) -> bool {
    requested.into_inner() <= addressable_volume(business_count, max_touches)
}
