//! Activity ledger data models

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest runs of consecutive study days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    /// Consecutive active days ending at the reference day
    pub current_streak: u32,
    /// Longest run anywhere in the history
    pub longest_streak: u32,
}

/// Daily activity counts with derived streaks (computed, not stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    /// Event count per calendar day
    pub activity_by_date: BTreeMap<NaiveDate, u32>,
    /// Consecutive active days ending at the reference day
    pub current_streak: u32,
    /// Longest run anywhere in the history
    pub longest_streak: u32,
}
