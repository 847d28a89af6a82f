//! Tariff rule model and related types.
//!
//! This module defines the TariffRule struct together with the
//! VehicleCategory and TimeWindow types that describe when and to
//! which vehicles a pricing policy applies.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the category of vehicle a tariff rule applies to.
///
/// Each tariff rule prices exactly one vehicle category; resolution
/// only ever considers rules for the category being quoted.
///
/// # Example
///
/// ```
/// use tariff_engine::models::VehicleCategory;
///
/// let category = VehicleCategory::Car;
/// assert_eq!(category.to_string(), "car");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Passenger cars and light vehicles.
    Car,
    /// Motorcycles and scooters.
    Motorcycle,
    /// Trucks and other oversize vehicles.
    Truck,
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleCategory::Car => write!(f, "car"),
            VehicleCategory::Motorcycle => write!(f, "motorcycle"),
            VehicleCategory::Truck => write!(f, "truck"),
        }
    }
}

/// A time-of-day window during which a tariff rule is in force.
///
/// The window carries no date component. When `start` is numerically
/// greater than `end` the window wraps across midnight, covering
/// `[start, 24:00)` followed by `[00:00, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// The start of the window (inclusive).
    pub start: NaiveTime,
    /// The end of the window (inclusive).
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the window contains the given time of day.
    ///
    /// Both boundaries are inclusive. A window whose end is numerically
    /// earlier than its start is treated as wrapping across midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use tariff_engine::models::TimeWindow;
    /// use chrono::NaiveTime;
    ///
    /// // Overnight window 22:00 to 06:00
    /// let window = TimeWindow::new(
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// );
    ///
    /// assert!(window.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
    /// assert!(window.contains(NaiveTime::from_hms_opt(2, 0, 0).unwrap()));
    /// assert!(!window.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    /// ```
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.spans_midnight() {
            time >= self.start || time <= self.end
        } else {
            time >= self.start && time <= self.end
        }
    }

    /// Returns true if the window crosses midnight.
    pub fn spans_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the window starts and ends at the same instant.
    ///
    /// A degenerate window is treated as a normal window that contains
    /// only its exact start time. The configuration loader warns about
    /// such windows at load time.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn default_true() -> bool {
    true
}

/// Represents one pricing policy for a vehicle category.
///
/// A rule is in force during its time window on its active weekdays.
/// When several rules are in force at the same instant the one with the
/// highest priority wins.
///
/// # Example
///
/// ```
/// use tariff_engine::models::{TariffRule, TimeWindow, VehicleCategory};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
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
///     first_hour_rate: Decimal::new(500, 2),      // 5.00
///     additional_hour_rate: Decimal::new(300, 2), // 3.00
///     minimum_charge: Decimal::new(250, 2),       // 2.50
///     maximum_charge: Some(Decimal::new(3000, 2)), // 30.00
///     priority: 10,
///     is_active: true,
/// };
///
/// assert!(rule.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffRule {
    /// Unique identifier for the rule.
    pub id: String,
    /// Human-readable name, used on receipts and in audit output.
    pub name: String,
    /// The vehicle category this rule prices.
    pub vehicle_category: VehicleCategory,
    /// The time-of-day window during which the rule is in force.
    pub window: TimeWindow,
    /// Weekdays on which the window is considered (0=Sunday..6=Saturday).
    pub active_weekdays: Vec<u8>,
    /// The rate charged for the first hour of a stay.
    pub first_hour_rate: Decimal,
    /// The rate charged per hour beyond the first.
    pub additional_hour_rate: Decimal,
    /// Floor applied to the computed total.
    pub minimum_charge: Decimal,
    /// Optional ceiling applied to the computed total; absent means unbounded.
    #[serde(default)]
    pub maximum_charge: Option<Decimal>,
    /// Priority for tie-breaking; higher wins when multiple rules match.
    #[serde(default)]
    pub priority: i32,
    /// Inactive rules are never selected.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TariffRule {
    /// Returns true if the rule is considered on the given weekday.
    ///
    /// Weekday indices in `active_weekdays` are numbered 0=Sunday through
    /// 6=Saturday, matching the catalog wire format.
    ///
    /// # Example
    ///
    /// ```
    /// use tariff_engine::models::{TariffRule, TimeWindow, VehicleCategory};
    /// use chrono::{NaiveTime, Weekday};
    /// use rust_decimal::Decimal;
    ///
    /// let rule = TariffRule {
    ///     id: "tariff_weekend".to_string(),
    ///     name: "Weekend rate".to_string(),
    ///     vehicle_category: VehicleCategory::Car,
    ///     window: TimeWindow::new(
    ///         NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
    ///         NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
    ///     ),
    ///     active_weekdays: vec![0, 6], // Sunday and Saturday
    ///     first_hour_rate: Decimal::new(400, 2),
    ///     additional_hour_rate: Decimal::new(200, 2),
    ///     minimum_charge: Decimal::ZERO,
    ///     maximum_charge: None,
    ///     priority: 0,
    ///     is_active: true,
    /// };
    ///
    /// assert!(rule.applies_on(Weekday::Sat));
    /// assert!(!rule.applies_on(Weekday::Wed));
    /// ```
    pub fn applies_on(&self, weekday: Weekday) -> bool {
        let index = weekday.num_days_from_sunday() as u8;
        self.active_weekdays.contains(&index)
    }

    /// Validates the rule's invariants.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the rule is well-formed, or an
    /// [`EngineError::InvalidRule`] naming the offending field if:
    /// - any rate or the minimum charge is negative
    /// - the maximum charge is below the minimum charge
    /// - `active_weekdays` is empty or contains an index greater than 6
    pub fn validate(&self) -> EngineResult<()> {
        if self.first_hour_rate < Decimal::ZERO {
            return Err(self.invalid("first_hour_rate must be non-negative"));
        }
        if self.additional_hour_rate < Decimal::ZERO {
            return Err(self.invalid("additional_hour_rate must be non-negative"));
        }
        if self.minimum_charge < Decimal::ZERO {
            return Err(self.invalid("minimum_charge must be non-negative"));
        }
        if let Some(maximum) = self.maximum_charge {
            if maximum < self.minimum_charge {
                return Err(self.invalid(&format!(
                    "maximum_charge ({}) is below minimum_charge ({})",
                    maximum, self.minimum_charge
                )));
            }
        }
        if self.active_weekdays.is_empty() {
            return Err(self.invalid("active_weekdays must not be empty"));
        }
        if let Some(bad) = self.active_weekdays.iter().find(|&&day| day > 6) {
            return Err(self.invalid(&format!(
                "active_weekdays contains invalid index {} (must be 0-6)",
                bad
            )));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidRule {
            rule_id: self.id.clone(),
            message: message.to_string(),
        }
    }
}
