//! Cost calculation output models.
//!
//! This module contains the [`CostOutcome`] type and the [`CostBreakdown`]
//! that records how a billable amount was derived. Both are immutable
//! results; nothing in the engine mutates them after creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Records how a billable amount was derived from a stay duration.
///
/// The breakdown is consumed by receipt rendering and audit logging in
/// the surrounding application.
///
/// # Example
///
/// ```
/// use tariff_engine::models::CostBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = CostBreakdown {
///     total_minutes: 130,
///     billable_minutes: 135,
///     first_tier_minutes: 60,
///     additional_tier_minutes: 75,
///     minimum_charge: Decimal::from_str("2.50").unwrap(),
///     rounding_applied: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The raw stay duration in minutes, before any rounding.
    pub total_minutes: i64,
    /// The duration actually billed, after grace and rounding.
    pub billable_minutes: i64,
    /// Minutes billed at the first-hour rate.
    pub first_tier_minutes: i64,
    /// Minutes billed at the additional-hour rate.
    pub additional_tier_minutes: i64,
    /// The minimum charge that was in force for this evaluation.
    pub minimum_charge: Decimal,
    /// Whether rounding up to the granularity altered the duration.
    pub rounding_applied: bool,
}

impl CostBreakdown {
    /// Creates the breakdown for a stay entirely inside the grace period.
    ///
    /// Billable minutes and both tiers are zero; the raw duration and the
    /// minimum charge in force are still recorded.
    pub fn grace(total_minutes: i64, minimum_charge: Decimal) -> Self {
        Self {
            total_minutes,
            billable_minutes: 0,
            first_tier_minutes: 0,
            additional_tier_minutes: 0,
            minimum_charge,
            rounding_applied: false,
        }
    }
}

/// The complete result of a cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOutcome {
    /// The final billable amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// How the amount was derived.
    pub breakdown: CostBreakdown,
}
