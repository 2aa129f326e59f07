//! Async client for the Ryanair cheapest-fares search API.
//!
//! Builds encoded queries against the fixed fare-finder endpoints, issues
//! the GET, validates the response, and maps the provider's JSON into the
//! [`Airport`], [`Flight`], and [`Trip`] domain types. Provider DTOs stay
//! internal; only the mapper crosses that boundary.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ryanair_fares::RyanairApi;
//!
//! # async fn run() -> Result<(), ryanair_fares::ApiError> {
//! let api = RyanairApi::new("EUR");
//! let from = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
//! let flights = api.get_one_way_flights("BRU", from, to, Some("ES")).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod query;

mod map;
mod wire;

pub use client::{RyanairApi, DEFAULT_CURRENCY};
pub use error::ApiError;
pub use model::{Airport, Flight, Trip};
