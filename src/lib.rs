//! Study analytics and spaced-repetition core
//!
//! The algorithmic heart of a personal study tracker, shared by every
//! surface that shows review queues, streaks, or performance charts.
//!
//! This crate provides:
//! - `review`: decides when a flashcard is next due based on recall quality
//! - `activity`: buckets study events by calendar day and derives streaks
//! - `performance`: folds exam results into trailing-window daily stats
//!
//! Everything is a pure function of caller-supplied collections and an
//! explicit reference clock or day. The core never reads the system clock
//! and performs no I/O, so concurrent readers recomputing on every render
//! always agree. Outputs are snapshots, valid only for the inputs they
//! were computed from.

pub mod activity;
pub mod error;
pub mod performance;
pub mod review;
pub mod time;

pub use activity::{
    activity_snapshot, bucket_events, compute_streaks, ActivitySnapshot, StreakStats,
};
pub use error::{AnalyticsError, Result};
pub use performance::{
    aggregate_window, today_stats, DailyBucket, ExamMeta, ExamResult, TodayStats,
    MONTH_WINDOW_DAYS, WEEK_WINDOW_DAYS,
};
pub use review::{
    due_cards, grade, preview_intervals, review_summary, ReviewCard, ReviewGrade, ReviewSummary,
};
