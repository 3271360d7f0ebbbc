//! Study-activity ledger
//!
//! This module provides:
//! - Calendar-day bucketing of study events in a fixed reference zone
//! - Current and longest streak derivation
//! - The combined `ActivitySnapshot` consumed by dashboard surfaces

pub mod ledger;
pub mod models;

pub use ledger::{activity_snapshot, bucket_events, compute_streaks};
pub use models::*;
