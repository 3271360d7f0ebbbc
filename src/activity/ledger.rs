//! Calendar-day bucketing and streak derivation
//!
//! Every study event is attributed to the calendar day obtained by viewing
//! its instant in a caller-chosen fixed offset; a streak is a run of
//! consecutive days with at least one event. Both are pure functions of the
//! inputs and an explicit reference day, so every surface that recomputes
//! them agrees.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use super::models::{ActivitySnapshot, StreakStats};

/// Calendar day of an instant in the reference zone.
///
/// This truncation rule is the single bucketing convention of the crate;
/// the performance aggregator attributes exam submissions with it too.
pub(crate) fn day_in_zone(instant: DateTime<Utc>, zone: FixedOffset) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// Count events per calendar day in the reference zone.
pub fn bucket_events(events: &[DateTime<Utc>], zone: FixedOffset) -> BTreeMap<NaiveDate, u32> {
    let mut buckets = BTreeMap::new();
    for event in events {
        *buckets.entry(day_in_zone(*event, zone)).or_insert(0) += 1;
    }
    buckets
}

/// Derive the current and longest streaks from daily counts.
///
/// A day participates when its count is positive; zero-count entries are
/// treated as absent. The current streak is anchored at `reference_today`:
/// 0 when that day has no activity, otherwise 1 plus the consecutive
/// immediately-preceding active days.
pub fn compute_streaks(
    activity_by_date: &BTreeMap<NaiveDate, u32>,
    reference_today: NaiveDate,
) -> StreakStats {
    let has_activity =
        |date: NaiveDate| activity_by_date.get(&date).map_or(false, |count| *count > 0);

    let mut current_streak = 0;
    if has_activity(reference_today) {
        current_streak = 1;
        let mut check_date = reference_today - Duration::days(1);

        // Count consecutive days backwards
        while has_activity(check_date) {
            current_streak += 1;
            check_date = check_date - Duration::days(1);
        }
    }

    // Longest run of consecutive active days, scanning in date order
    let mut longest_streak = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for (&date, &count) in activity_by_date {
        if count == 0 {
            continue;
        }
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        previous = Some(date);
    }

    StreakStats {
        current_streak,
        longest_streak,
    }
}

/// Bucket events and derive streaks in one call.
pub fn activity_snapshot(
    events: &[DateTime<Utc>],
    zone: FixedOffset,
    reference_today: NaiveDate,
) -> ActivitySnapshot {
    let activity_by_date = bucket_events(events, zone);
    let StreakStats {
        current_streak,
        longest_streak,
    } = compute_streaks(&activity_by_date, reference_today);

    ActivitySnapshot {
        activity_by_date,
        current_streak,
        longest_streak,
    }
}
