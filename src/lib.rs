//! Tariff Resolution and Cost Calculation Engine for parking facilities
//!
//! This crate provides functionality for selecting the applicable tariff rule
//! for a vehicle at a point in time (handling overlapping time windows,
//! weekday constraints, and overnight wrap-around) and for calculating the
//! billable parking cost from a resolved rule and a stay duration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
