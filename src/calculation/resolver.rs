//! Tariff rule resolution logic.
//!
//! This module selects the single applicable tariff rule for a vehicle
//! category at a point in time. Resolution runs in two phases: rules
//! matching the instant's weekday and time-of-day window are preferred,
//! and when none match the highest-priority rule for the category is
//! used as the default rate, so a vehicle is never left unpriced merely
//! because no window covers the current instant.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{TariffRule, VehicleCategory};

/// How a tariff rule was matched during resolution.
///
/// Distinguishing the two phases lets receipts and audit logs show
/// whether a stay was priced by a scheduled window or by the category
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The rule's weekday set and time window both contained the instant.
    TimeWindow,
    /// No window matched; the rule was chosen as the category default.
    CategoryFallback,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::TimeWindow => write!(f, "time_window"),
            MatchKind::CategoryFallback => write!(f, "category_fallback"),
        }
    }
}

/// A resolved tariff rule together with how it was matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffMatch<'a> {
    /// The selected rule.
    pub rule: &'a TariffRule,
    /// Whether the rule matched by window or as the category fallback.
    pub match_kind: MatchKind,
}

/// Selects the applicable tariff rule for a vehicle at an instant.
///
/// # Arguments
///
/// * `catalog` - The tariff catalog (may be empty)
/// * `category` - The vehicle category being priced
/// * `instant` - The point in time to resolve for
///
/// # Returns
///
/// The selected rule wrapped in a [`TariffMatch`], or `None` when the
/// catalog has no active rule for the category at all ("no pricing
/// available" - the caller must handle this state).
///
/// # Resolution
///
/// 1. Only active rules for the requested category are considered.
/// 2. Among those, rules whose weekday set contains the instant's weekday
///    and whose time window contains the instant's time-of-day are
///    preferred; overnight windows wrap across midnight.
/// 3. The highest-priority match wins. Ties are broken by catalog order:
///    the first-encountered rule is kept. This tie-break is stable and
///    part of the contract.
/// 4. When no window matches, the highest-priority rule for the category
///    (same tie-break) is returned as [`MatchKind::CategoryFallback`].
///
/// # Example
///
/// ```
/// use tariff_engine::calculation::{resolve_tariff, MatchKind};
/// use tariff_engine::models::{TariffRule, TimeWindow, VehicleCategory};
/// use chrono::{NaiveDateTime, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let catalog = vec![TariffRule {
///     id: "tariff_day_car".to_string(),
///     name: "Daytime car rate".to_string(),
///     vehicle_category: VehicleCategory::Car,
///     window: TimeWindow::new(
///         NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     ),
///     active_weekdays: vec![1, 2, 3, 4, 5],
///     first_hour_rate: Decimal::new(500, 2),
///     additional_hour_rate: Decimal::new(300, 2),
///     minimum_charge: Decimal::ZERO,
///     maximum_charge: None,
///     priority: 0,
///     is_active: true,
/// }];
///
/// // 2026-01-14 is a Wednesday
/// let instant = NaiveDateTime::parse_from_str("2026-01-14 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let resolved = resolve_tariff(&catalog, VehicleCategory::Car, instant).unwrap();
/// assert_eq!(resolved.rule.id, "tariff_day_car");
/// assert_eq!(resolved.match_kind, MatchKind::TimeWindow);
/// ```
pub fn resolve_tariff(
    catalog: &[TariffRule],
    category: VehicleCategory,
    instant: NaiveDateTime,
) -> Option<TariffMatch<'_>> {
    let candidates: Vec<&TariffRule> = catalog
        .iter()
        .filter(|rule| rule.is_active && rule.vehicle_category == category)
        .collect();

    let weekday = instant.weekday();
    let time = instant.time();

    let window_match = highest_priority(
        candidates
            .iter()
            .copied()
            .filter(|rule| rule.applies_on(weekday) && rule.window.contains(time)),
    );

    if let Some(rule) = window_match {
        return Some(TariffMatch {
            rule,
            match_kind: MatchKind::TimeWindow,
        });
    }

    highest_priority(candidates.into_iter()).map(|rule| TariffMatch {
        rule,
        match_kind: MatchKind::CategoryFallback,
    })
}

/// Picks the rule with the highest priority, keeping the first-encountered
/// rule on ties.
fn highest_priority<'a, I>(rules: I) -> Option<&'a TariffRule>
where
    I: Iterator<Item = &'a TariffRule>,
{
    rules.fold(None, |best, rule| match best {
        Some(current) if rule.priority > current.priority => Some(rule),
        None => Some(rule),
        _ => best,
    })
}
