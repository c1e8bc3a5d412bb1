//! Maps a period selection to a concrete inclusive date range.

use chrono::{Duration, NaiveDate};
use common::{DateRange, PeriodMode, SelectionState};
use tracing::debug;

use crate::error::{ComputeError, Result};

/// Resolve a selection into a concrete `[start, end]` range.
///
/// Presets anchor at `today` (injected by the caller so tests can pin it)
/// and look back a fixed number of days. Custom mode uses the explicit
/// picker dates; with neither date supplied it falls back to the full
/// bounds of the underlying series (a fallback, not an error). Future
/// anchors are not clamped: a range beyond the series simply filters to
/// an empty slice downstream.
pub fn resolve_period(
    selection: &SelectionState,
    today: NaiveDate,
    series_bounds: (NaiveDate, NaiveDate),
) -> Result<DateRange> {
    let range = match selection.mode {
        PeriodMode::LastMonth => trailing(today, 30),
        PeriodMode::Last3Months => trailing(today, 90),
        PeriodMode::Last6Months => trailing(today, 180),
        PeriodMode::LastYear => trailing(today, 365),
        PeriodMode::Custom => match (selection.custom_start, selection.custom_end) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(ComputeError::ReversedRange { start, end });
                }
                DateRange::new(start, end)
            }
            (None, None) => {
                let (start, end) = series_bounds;
                DateRange::new(start, end)
            }
            _ => return Err(ComputeError::MissingBound),
        },
    };

    debug!(mode = %selection.mode, %range, "resolved analysis period");
    Ok(range)
}

/// Label shown above the KPIs and embedded in every chart title.
pub fn period_label(range: &DateRange) -> String {
    format!("Analysis period: {} to {}", range.start, range.end)
}

fn trailing(today: NaiveDate, days: i64) -> DateRange {
    DateRange::new(today - Duration::days(days), today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SelectionEvent;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds() -> (NaiveDate, NaiveDate) {
        (date(2023, 1, 1), date(2023, 12, 31))
    }

    #[test]
    fn test_last_month_is_anchored_at_today() {
        // holds for any injected anchor, including one outside the series
        for today in [date(2023, 6, 15), date(2026, 8, 8)] {
            let selection = SelectionState::new(PeriodMode::LastMonth);
            let range = resolve_period(&selection, today, bounds()).unwrap();
            assert_eq!(range.end, today);
            assert_eq!(range.start, today - Duration::days(30));
        }
    }

    #[test]
    fn test_preset_lookback_days() {
        let today = date(2023, 12, 31);
        let cases = [
            (PeriodMode::LastMonth, 30),
            (PeriodMode::Last3Months, 90),
            (PeriodMode::Last6Months, 180),
            (PeriodMode::LastYear, 365),
        ];
        for (mode, days) in cases {
            let range = resolve_period(&SelectionState::new(mode), today, bounds()).unwrap();
            assert_eq!(range.start, today - Duration::days(days));
            assert_eq!(range.end, today);
        }
    }

    #[test]
    fn test_presets_ignore_custom_dates() {
        let selection = SelectionState::new(PeriodMode::LastMonth)
            .reduce(SelectionEvent::CustomStartChanged(Some(date(2023, 1, 1))))
            .reduce(SelectionEvent::CustomEndChanged(Some(date(2023, 2, 1))));
        let today = date(2023, 6, 15);
        let range = resolve_period(&selection, today, bounds()).unwrap();
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_custom_without_dates_falls_back_to_series_bounds() {
        let selection = SelectionState::new(PeriodMode::Custom);
        let range = resolve_period(&selection, date(2026, 8, 8), bounds()).unwrap();
        assert_eq!(range, DateRange::new(date(2023, 1, 1), date(2023, 12, 31)));
    }

    #[test]
    fn test_custom_with_explicit_dates() {
        let selection = SelectionState {
            mode: PeriodMode::Custom,
            custom_start: Some(date(2023, 3, 1)),
            custom_end: Some(date(2023, 3, 10)),
        };
        let range = resolve_period(&selection, date(2026, 8, 8), bounds()).unwrap();
        assert_eq!(range, DateRange::new(date(2023, 3, 1), date(2023, 3, 10)));
    }

    #[test]
    fn test_custom_with_one_missing_bound_is_an_error() {
        for (start, end) in [
            (Some(date(2023, 3, 1)), None),
            (None, Some(date(2023, 3, 10))),
        ] {
            let selection = SelectionState {
                mode: PeriodMode::Custom,
                custom_start: start,
                custom_end: end,
            };
            let err = resolve_period(&selection, date(2023, 6, 1), bounds()).unwrap_err();
            assert_eq!(err, ComputeError::MissingBound);
        }
    }

    #[test]
    fn test_custom_reversed_range_is_an_error() {
        let selection = SelectionState {
            mode: PeriodMode::Custom,
            custom_start: Some(date(2023, 3, 10)),
            custom_end: Some(date(2023, 3, 1)),
        };
        let err = resolve_period(&selection, date(2023, 6, 1), bounds()).unwrap_err();
        assert!(matches!(err, ComputeError::ReversedRange { .. }));
        assert_eq!(
            err.to_string(),
            "Start date 2023-03-10 is after end date 2023-03-01"
        );
    }

    #[test]
    fn test_period_label_format() {
        let range = DateRange::new(date(2023, 3, 1), date(2023, 3, 10));
        assert_eq!(
            period_label(&range),
            "Analysis period: 2023-03-01 to 2023-03-10"
        );
    }
}
