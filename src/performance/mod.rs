//! Exam performance aggregation
//!
//! This module provides:
//! - Trailing-window daily buckets of exam correctness for chart surfaces
//! - Today's headline stats (questions solved, correct percentage)
//! - Week/month window presets

pub mod aggregate;
pub mod models;

pub use aggregate::{aggregate_window, today_stats, MONTH_WINDOW_DAYS, WEEK_WINDOW_DAYS};
pub use models::*;
