#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! daytrip — terminal client for the trip-planning service.
//!
//! Sign in, name a trip, confirm a destination and travel date, assemble an
//! ordered list of points of interest (with nearby suggestions one keypress
//! away), and submit the whole thing to the itinerary planner.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod places;
pub mod tui;
