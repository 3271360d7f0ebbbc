//! Lapse-aware two-factor spaced repetition scheduling
//!
//! Each card carries an ease factor and a day interval; the four recall
//! grades adjust both:
//! - Again: lapse, repetitions reset, interval back to 1 day, ease penalized
//! - Hard: interval grows slowly, ease penalized
//! - Good: 1 day, then 6 days, then interval multiplied by ease
//! - Easy: interval multiplied by ease with a 1.3 bonus, ease rewarded
//!
//! All operations take the review instant explicitly; nothing here reads
//! the system clock.

use chrono::{DateTime, Duration, Utc};

use super::models::{ReviewCard, ReviewGrade, ReviewSummary};
use crate::error::{AnalyticsError, Result};

/// Minimum ease factor allowed
const MIN_EASE_FACTOR: f32 = 1.3;

/// Ease penalty on a lapse
const AGAIN_EASE_PENALTY: f32 = 0.20;

/// Ease penalty on a hard recall
const HARD_EASE_PENALTY: f32 = 0.15;

/// Ease reward on an easy recall
const EASY_EASE_BONUS: f32 = 0.15;

/// Interval multiplier for hard recalls
const HARD_INTERVAL_FACTOR: f32 = 1.2;

/// Extra interval multiplier for easy recalls
const EASY_INTERVAL_BONUS: f32 = 1.3;

/// Grade a card and compute its next schedule.
///
/// Pure: the input card is untouched; the returned card carries the new
/// interval, ease factor, repetition count, and a due date of
/// `reviewed_at` plus the new interval. Rounding of fractional intervals
/// is to the nearest whole day, ties up.
///
/// A card whose ease factor is already below the floor, or whose interval
/// is negative, comes from a corrupted store and is rejected rather than
/// repaired.
pub fn grade(
    card: &ReviewCard,
    grade: ReviewGrade,
    reviewed_at: DateTime<Utc>,
) -> Result<ReviewCard> {
    validate_card(card)?;

    let (repetition_count, interval_days, ease_factor) = match grade {
        ReviewGrade::Again => (
            0,
            1,
            (card.ease_factor - AGAIN_EASE_PENALTY).max(MIN_EASE_FACTOR),
        ),
        ReviewGrade::Hard => (
            card.repetition_count + 1,
            ((card.interval_days as f32 * HARD_INTERVAL_FACTOR).round() as i32).max(1),
            (card.ease_factor - HARD_EASE_PENALTY).max(MIN_EASE_FACTOR),
        ),
        ReviewGrade::Good => {
            let interval = match card.repetition_count {
                // First success: 1 day
                0 => 1,
                // Second success: 6 days
                1 => 6,
                // Established card: multiply by ease
                _ => (card.interval_days as f32 * card.ease_factor).round() as i32,
            };
            (card.repetition_count + 1, interval, card.ease_factor)
        }
        ReviewGrade::Easy => (
            card.repetition_count + 1,
            (card.interval_days as f32 * card.ease_factor * EASY_INTERVAL_BONUS).round() as i32,
            card.ease_factor + EASY_EASE_BONUS,
        ),
    };

    Ok(ReviewCard {
        repetition_count,
        interval_days,
        ease_factor,
        next_review_at: reviewed_at + Duration::days(interval_days as i64),
        last_reviewed_at: Some(reviewed_at),
        ..card.clone()
    })
}

/// Cards due at `reference_now`, in input order.
///
/// The bound is inclusive; a card that has never been reviewed is always
/// included.
pub fn due_cards<'a>(
    cards: &'a [ReviewCard],
    reference_now: DateTime<Utc>,
) -> Vec<&'a ReviewCard> {
    cards.iter().filter(|c| c.is_due(reference_now)).collect()
}

/// The interval each grade would produce, as [Again, Hard, Good, Easy].
///
/// Used to label grade buttons before the user answers.
pub fn preview_intervals(card: &ReviewCard) -> Result<[i32; 4]> {
    // The review instant shifts the due date, not the interval length;
    // any timestamp works here.
    let at = card.next_review_at;

    Ok([
        grade(card, ReviewGrade::Again, at)?.interval_days,
        grade(card, ReviewGrade::Hard, at)?.interval_days,
        grade(card, ReviewGrade::Good, at)?.interval_days,
        grade(card, ReviewGrade::Easy, at)?.interval_days,
    ])
}

/// Overview counts across a card set.
pub fn review_summary(cards: &[ReviewCard], reference_now: DateTime<Utc>) -> ReviewSummary {
    let mut summary = ReviewSummary {
        total_cards: cards.len(),
        new_cards: 0,
        due_cards: 0,
    };

    for card in cards {
        if card.last_reviewed_at.is_none() {
            summary.new_cards += 1;
        }
        if card.is_due(reference_now) {
            summary.due_cards += 1;
        }
    }

    summary
}

fn validate_card(card: &ReviewCard) -> Result<()> {
    if card.ease_factor < MIN_EASE_FACTOR {
        return Err(AnalyticsError::Validation(format!(
            "ease factor {} is below the minimum {}",
            card.ease_factor, MIN_EASE_FACTOR
        )));
    }
    if card.interval_days < 0 {
        return Err(AnalyticsError::Validation(format!(
            "interval of {} days is negative",
            card.interval_days
        )));
    }
    Ok(())
}
