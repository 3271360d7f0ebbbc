//! Trailing-window aggregation of exam results
//!
//! Submissions are attributed to calendar days with the same fixed-offset
//! rule the activity ledger uses, then folded into a zero-filled window of
//! daily buckets. Correct counts are reconstructed from the aggregate score
//! ratio, `round(score / 100 * question_count)`, because the upstream
//! result format does not retain per-question outcomes. Repeated small
//! exams on one day can therefore accumulate rounding drift.

use std::collections::HashMap;

use chrono::{Duration, FixedOffset, NaiveDate};
use log::debug;
use uuid::Uuid;

use super::models::{DailyBucket, ExamMeta, ExamResult, TodayStats};
use crate::activity::ledger::day_in_zone;
use crate::error::{AnalyticsError, Result};

/// Window length of the "week" dashboard view
pub const WEEK_WINDOW_DAYS: u32 = 7;

/// Window length of the "month" dashboard view
pub const MONTH_WINDOW_DAYS: u32 = 30;

/// Fold exam results into a trailing window of daily buckets.
///
/// Returns exactly `window_days` contiguous buckets ending at
/// `reference_today` inclusive, oldest first; days without submissions stay
/// at zero. A result referencing an exam missing from `exams` is skipped,
/// since stale catalogs are expected (a deleted exam leaves its results
/// behind). An out-of-range score fails the whole aggregation.
pub fn aggregate_window(
    results: &[ExamResult],
    exams: &HashMap<Uuid, ExamMeta>,
    window_days: u32,
    reference_today: NaiveDate,
    zone: FixedOffset,
) -> Result<Vec<DailyBucket>> {
    if window_days == 0 {
        return Err(AnalyticsError::Validation(
            "window length must be at least one day".to_string(),
        ));
    }

    let window_start = reference_today - Duration::days(window_days as i64 - 1);
    let mut buckets: Vec<DailyBucket> = (0..window_days)
        .map(|offset| DailyBucket {
            date: window_start + Duration::days(offset as i64),
            correct_count: 0,
            total_count: 0,
        })
        .collect();

    for result in results {
        if !(0.0..=100.0).contains(&result.score) {
            return Err(AnalyticsError::Validation(format!(
                "score {} is outside 0-100",
                result.score
            )));
        }

        let day = day_in_zone(result.submitted_at, zone);
        if day < window_start || day > reference_today {
            continue;
        }

        let exam = match exams.get(&result.exam_id) {
            Some(exam) => exam,
            None => {
                debug!("skipping result for unknown exam {}", result.exam_id);
                continue;
            }
        };
        if exam.question_count == 0 {
            return Err(AnalyticsError::Validation(format!(
                "exam {} has no questions",
                exam.id
            )));
        }

        let correct = (result.score / 100.0 * exam.question_count as f32).round() as u32;
        let bucket = &mut buckets[(day - window_start).num_days() as usize];
        bucket.total_count += exam.question_count;
        bucket.correct_count += correct;
    }

    Ok(buckets)
}

/// Today's totals with a correctness percentage.
///
/// The one-day window of [`aggregate_window`], plus
/// `round(correct / total * 100)`, or 0 when nothing was attempted.
pub fn today_stats(
    results: &[ExamResult],
    exams: &HashMap<Uuid, ExamMeta>,
    reference_today: NaiveDate,
    zone: FixedOffset,
) -> Result<TodayStats> {
    let buckets = aggregate_window(results, exams, 1, reference_today, zone)?;
    let today = &buckets[0];

    let correct_percentage = if today.total_count > 0 {
        (today.correct_count as f32 / today.total_count as f32 * 100.0).round() as u32
    } else {
        0
    };

    Ok(TodayStats {
        questions_solved: today.total_count,
        correct_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn utc_zone() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn exam_catalog(question_count: u32) -> (Uuid, HashMap<Uuid, ExamMeta>) {
        let id = Uuid::new_v4();
        let mut exams = HashMap::new();
        exams.insert(id, ExamMeta { id, question_count });
        (id, exams)
    }

    fn result(exam_id: Uuid, score: f32, submitted_at: DateTime<Utc>) -> ExamResult {
        ExamResult {
            exam_id,
            score,
            submitted_at,
        }
    }

    #[test]
    fn test_empty_input_still_fills_the_window() {
        let (_, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);

        let buckets =
            aggregate_window(&[], &exams, WEEK_WINDOW_DAYS, today, utc_zone()).unwrap();

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].date, date(2024, 1, 1));
        assert_eq!(buckets[6].date, today);
        for pair in buckets.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(buckets.iter().all(|b| b.correct_count == 0 && b.total_count == 0));
    }

    #[test]
    fn test_score_ratio_becomes_correct_count() {
        let (exam_id, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);
        let results = vec![result(exam_id, 80.0, instant(2024, 1, 7, 14))];

        let buckets = aggregate_window(&results, &exams, 7, today, utc_zone()).unwrap();

        let todays = buckets.last().unwrap();
        assert_eq!(todays.correct_count, 8);
        assert_eq!(todays.total_count, 10);

        let stats = today_stats(&results, &exams, today, utc_zone()).unwrap();
        assert_eq!(stats.questions_solved, 10);
        assert_eq!(stats.correct_percentage, 80);
    }

    #[test]
    fn test_fractional_scores_round_to_nearest() {
        let (exam_id, exams) = exam_catalog(4);
        let today = date(2024, 1, 7);
        // 85% of 4 questions = 3.4 -> 3 correct
        let results = vec![result(exam_id, 85.0, instant(2024, 1, 7, 9))];

        let stats = today_stats(&results, &exams, today, utc_zone()).unwrap();
        assert_eq!(stats.questions_solved, 4);
        assert_eq!(stats.correct_percentage, 75);
    }

    #[test]
    fn test_same_day_results_accumulate() {
        let (exam_id, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);
        let results = vec![
            result(exam_id, 80.0, instant(2024, 1, 7, 9)),
            result(exam_id, 60.0, instant(2024, 1, 7, 18)),
        ];

        let buckets = aggregate_window(&results, &exams, 1, today, utc_zone()).unwrap();
        assert_eq!(buckets[0].total_count, 20);
        assert_eq!(buckets[0].correct_count, 14);
    }

    #[test]
    fn test_submissions_outside_the_window_are_ignored() {
        let (exam_id, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);
        let results = vec![
            result(exam_id, 90.0, instant(2023, 12, 25, 9)),
            result(exam_id, 90.0, instant(2024, 1, 8, 9)),
        ];

        let buckets = aggregate_window(&results, &exams, 7, today, utc_zone()).unwrap();
        assert!(buckets.iter().all(|b| b.total_count == 0));
    }

    #[test]
    fn test_unknown_exam_is_skipped_not_fatal() {
        let (exam_id, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);
        let results = vec![
            result(Uuid::new_v4(), 100.0, instant(2024, 1, 7, 9)),
            result(exam_id, 50.0, instant(2024, 1, 7, 10)),
        ];

        let buckets = aggregate_window(&results, &exams, 1, today, utc_zone()).unwrap();
        assert_eq!(buckets[0].total_count, 10);
        assert_eq!(buckets[0].correct_count, 5);
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let (exam_id, exams) = exam_catalog(10);
        let today = date(2024, 1, 7);
        let results = vec![result(exam_id, 150.0, instant(2024, 1, 7, 9))];

        let err = aggregate_window(&results, &exams, 7, today, utc_zone()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));

        let results = vec![result(exam_id, -1.0, instant(2024, 1, 7, 9))];
        let err = aggregate_window(&results, &exams, 7, today, utc_zone()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let (_, exams) = exam_catalog(10);
        let err =
            aggregate_window(&[], &exams, 0, date(2024, 1, 7), utc_zone()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }

    #[test]
    fn test_questionless_exam_is_rejected() {
        let (exam_id, exams) = exam_catalog(0);
        let today = date(2024, 1, 7);
        let results = vec![result(exam_id, 50.0, instant(2024, 1, 7, 9))];

        let err = aggregate_window(&results, &exams, 7, today, utc_zone()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }

    #[test]
    fn test_attribution_follows_the_reference_zone() {
        let (exam_id, exams) = exam_catalog(10);
        // 03:00 UTC on Jan 8 is the evening of Jan 7 in New York
        let results = vec![result(exam_id, 70.0, instant(2024, 1, 8, 3))];
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();

        let stats = today_stats(&results, &exams, date(2024, 1, 7), new_york).unwrap();
        assert_eq!(stats.questions_solved, 10);

        let stats = today_stats(&results, &exams, date(2024, 1, 7), utc_zone()).unwrap();
        assert_eq!(stats.questions_solved, 0);
        assert_eq!(stats.correct_percentage, 0);
    }

    #[test]
    fn test_quiet_day_reports_zero_percentage() {
        let (_, exams) = exam_catalog(10);
        let stats = today_stats(&[], &exams, date(2024, 1, 7), utc_zone()).unwrap();

        assert_eq!(stats.questions_solved, 0);
        assert_eq!(stats.correct_percentage, 0);
    }
}
