//! Parking cost calculation logic.
//!
//! This module turns a resolved tariff rule, a raw stay duration, and an
//! evaluation configuration into a billable amount plus a breakdown of
//! how it was derived. The calculation stages run in a fixed order:
//! grace period, duration rounding, tiered pricing, minimum floor,
//! maximum ceiling, and a single terminal currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{CostBreakdown, CostOutcome, EvaluationConfig, TariffRule};

/// Minutes in one pricing tier (the first hour).
const FIRST_TIER_MINUTES: i64 = 60;

/// Calculates the billable amount for a stay.
///
/// # Arguments
///
/// * `rule` - The resolved tariff rule
/// * `total_minutes` - The raw stay duration in minutes
/// * `config` - Evaluation-time parameters (granularity and grace period)
///
/// # Returns
///
/// Returns a [`CostOutcome`] with the amount rounded to 2 decimal places
/// (half-up) and a [`CostBreakdown`], or an error if:
/// - `total_minutes` is negative (`InvalidDuration`)
/// - the rounding granularity is zero (`InvalidGranularity`)
/// - the rule violates its invariants (`InvalidRule`)
///
/// These are contract violations and fail fast; for well-formed inputs
/// the function never errors.
///
/// # Calculation stages
///
/// 1. Stays at or below the grace period cost nothing; the breakdown is
///    zeroed and no further stage runs.
/// 2. The duration is rounded up to the next multiple of the granularity.
/// 3. The first `min(billable, 60)` minutes are charged proportionally at
///    the first-hour rate, the remainder at the additional-hour rate.
/// 4. The sum is clamped up to the rule's minimum charge, then down to
///    the maximum charge when one is set.
/// 5. The result is rounded to the cent, half-up, exactly once.
///
/// # Example
///
/// ```
/// use tariff_engine::calculation::calculate_cost;
/// use tariff_engine::models::{EvaluationConfig, TariffRule, TimeWindow, VehicleCategory};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rule = TariffRule {
///     id: "tariff_day_car".to_string(),
///     name: "Daytime car rate".to_string(),
///     vehicle_category: VehicleCategory::Car,
///     window: TimeWindow::new(
///         NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     ),
///     active_weekdays: vec![1, 2, 3, 4, 5],
///     first_hour_rate: Decimal::from_str("5.00").unwrap(),
///     additional_hour_rate: Decimal::from_str("3.00").unwrap(),
///     minimum_charge: Decimal::from_str("2.50").unwrap(),
///     maximum_charge: Some(Decimal::from_str("30.00").unwrap()),
///     priority: 0,
///     is_active: true,
/// };
/// let config = EvaluationConfig {
///     rounding_granularity_minutes: 15,
///     grace_minutes: 10,
/// };
///
/// // 130 minutes rounds to 135: 5.00 for the first hour plus
/// // 75/60 x 3.00 = 3.75 for the remainder.
/// let outcome = calculate_cost(&rule, 130, &config).unwrap();
/// assert_eq!(outcome.amount, Decimal::from_str("8.75").unwrap());
/// assert_eq!(outcome.breakdown.billable_minutes, 135);
/// ```
pub fn calculate_cost(
    rule: &TariffRule,
    total_minutes: i64,
    config: &EvaluationConfig,
) -> EngineResult<CostOutcome> {
    if total_minutes < 0 {
        return Err(EngineError::InvalidDuration {
            minutes: total_minutes,
        });
    }
    config.validate()?;
    rule.validate()?;

    // Grace period short-circuits every other stage
    if total_minutes <= i64::from(config.grace_minutes) {
        return Ok(CostOutcome {
            amount: Decimal::ZERO,
            breakdown: CostBreakdown::grace(total_minutes, rule.minimum_charge),
        });
    }

    let (billable_minutes, rounding_applied) =
        round_up_to_granularity(total_minutes, i64::from(config.rounding_granularity_minutes));

    let first_tier_minutes = billable_minutes.min(FIRST_TIER_MINUTES);
    let additional_tier_minutes = (billable_minutes - FIRST_TIER_MINUTES).max(0);

    // Proportional charge per tier; intermediate values stay unrounded so
    // the only monetary rounding happens at the end.
    let first_charge =
        Decimal::from(first_tier_minutes) / Decimal::from(FIRST_TIER_MINUTES) * rule.first_hour_rate;
    let additional_charge = Decimal::from(additional_tier_minutes)
        / Decimal::from(FIRST_TIER_MINUTES)
        * rule.additional_hour_rate;

    let mut amount = first_charge + additional_charge;

    if amount < rule.minimum_charge {
        amount = rule.minimum_charge;
    }
    if let Some(maximum) = rule.maximum_charge {
        if amount > maximum {
            amount = maximum;
        }
    }

    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(CostOutcome {
        amount,
        breakdown: CostBreakdown {
            total_minutes,
            billable_minutes,
            first_tier_minutes,
            additional_tier_minutes,
            minimum_charge: rule.minimum_charge,
            rounding_applied,
        },
    })
}

/// Rounds a duration up to the next multiple of the granularity.
///
/// Returns the rounded duration and whether rounding changed the value.
fn round_up_to_granularity(minutes: i64, granularity: i64) -> (i64, bool) {
    let remainder = minutes % granularity;
    if remainder == 0 {
        (minutes, false)
    } else {
        (minutes - remainder + granularity, true)
    }
}
