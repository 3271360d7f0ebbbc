//! Spaced-repetition review scheduling
//!
//! This module provides:
//! - The `ReviewCard` model and the four-grade recall scale
//! - Lapse-aware grading that derives each card's next due date
//! - Due-set selection and deck-level summary counts

pub mod algorithm;
pub mod models;

pub use algorithm::{due_cards, grade, preview_intervals, review_summary};
pub use models::*;
