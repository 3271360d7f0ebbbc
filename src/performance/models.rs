//! Exam performance data models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed exam submission (owned by the exam subsystem, read here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    /// Exam this submission belongs to
    pub exam_id: Uuid,
    /// Aggregate score, 0-100 inclusive, fractional
    pub score: f32,
    /// When the exam was submitted
    pub submitted_at: DateTime<Utc>,
}

/// The slice of exam metadata the aggregator needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamMeta {
    /// Unique identifier
    pub id: Uuid,
    /// Number of questions on the exam, always positive
    pub question_count: u32,
}

/// Per-day correctness totals inside a trailing window (computed, not stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// Calendar day the bucket covers
    pub date: NaiveDate,
    /// Questions answered correctly that day
    pub correct_count: u32,
    /// Questions attempted that day
    pub total_count: u32,
}

/// Today's headline numbers for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    /// Questions attempted today
    pub questions_solved: u32,
    /// Rounded share of correct answers, 0 when nothing was attempted
    pub correct_percentage: u32,
}
