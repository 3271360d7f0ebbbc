//! Data models for the review scheduler

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default ease factor for a fresh card
pub const DEFAULT_EASE_FACTOR: f32 = 2.5;

/// Recall quality reported after reviewing a card, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewGrade {
    /// Failed to recall; the card lapses
    Again,
    /// Recalled with serious difficulty
    Hard,
    /// Recalled correctly
    Good,
    /// Recalled effortlessly
    Easy,
}

/// A flashcard under spaced repetition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    /// Unique identifier
    pub id: Uuid,
    /// Owning deck (back-reference only)
    pub deck_id: Uuid,
    /// Interval growth multiplier, never below 1.3
    pub ease_factor: f32,
    /// Days until next due, measured from the last review
    pub interval_days: i32,
    /// Consecutive successful reviews since the last lapse
    pub repetition_count: u32,
    /// When the card next becomes due; derived by grading, never set directly
    pub next_review_at: DateTime<Utc>,
    /// Last review instant, absent when the card has never been reviewed
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewCard {
    /// Create a fresh card, due immediately
    pub fn new(deck_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            deck_id,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0,
            repetition_count: 0,
            next_review_at: created_at,
            last_reviewed_at: None,
        }
    }

    /// Check if the card is due at the reference time (inclusive bound).
    /// A card that has never been reviewed is always due.
    pub fn is_due(&self, reference_now: DateTime<Utc>) -> bool {
        self.last_reviewed_at.is_none() || self.next_review_at <= reference_now
    }
}

/// Deck-level counts for an overview panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Cards in the input set
    pub total_cards: usize,
    /// Cards never reviewed
    pub new_cards: usize,
    /// Cards due at the reference time
    pub due_cards: usize,
}
