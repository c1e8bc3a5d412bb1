use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Named preset controlling the derived analysis window.
///
/// Wire values match the selector options of the dashboard UI
/// (`1M`, `3M`, `6M`, `1Y`, `custom`); the default selection is `1M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PeriodMode {
    /// Trailing 30 days.
    #[default]
    #[serde(rename = "1M")]
    LastMonth,
    /// Trailing 90 days.
    #[serde(rename = "3M")]
    Last3Months,
    /// Trailing 180 days.
    #[serde(rename = "6M")]
    Last6Months,
    /// Trailing 365 days.
    #[serde(rename = "1Y")]
    LastYear,
    /// Explicit user-supplied start/end dates.
    #[serde(rename = "custom")]
    Custom,
}

impl PeriodMode {
    /// All selectable modes, in selector order.
    pub const ALL: [PeriodMode; 5] = [
        PeriodMode::LastMonth,
        PeriodMode::Last3Months,
        PeriodMode::Last6Months,
        PeriodMode::LastYear,
        PeriodMode::Custom,
    ];

    /// Wire value used in query strings and the selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodMode::LastMonth => "1M",
            PeriodMode::Last3Months => "3M",
            PeriodMode::Last6Months => "6M",
            PeriodMode::LastYear => "1Y",
            PeriodMode::Custom => "custom",
        }
    }

    /// Human-readable selector label.
    pub fn label(&self) -> &'static str {
        match self {
            PeriodMode::LastMonth => "Last month",
            PeriodMode::Last3Months => "Last 3 months",
            PeriodMode::Last6Months => "Last 6 months",
            PeriodMode::LastYear => "Last year",
            PeriodMode::Custom => "Custom",
        }
    }

    /// True when explicit date pickers should be shown.
    pub fn is_custom(&self) -> bool {
        matches!(self, PeriodMode::Custom)
    }
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1M" => Ok(PeriodMode::LastMonth),
            "3M" => Ok(PeriodMode::Last3Months),
            "6M" => Ok(PeriodMode::Last6Months),
            "1Y" => Ok(PeriodMode::LastYear),
            "custom" => Ok(PeriodMode::Custom),
            other => Err(format!("unknown period mode: {other}")),
        }
    }
}

/// Inclusive date range resolved from a period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `date` falls within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Current period selection as driven by the dashboard controls.
///
/// `custom_start`/`custom_end` hold whatever the date pickers contain;
/// they are only consulted when `mode` is [`PeriodMode::Custom`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionState {
    pub mode: PeriodMode,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new(mode: PeriodMode) -> Self {
        Self {
            mode,
            custom_start: None,
            custom_end: None,
        }
    }

    /// Pure state-update function: one reducer for every dashboard control.
    ///
    /// Each user interaction maps to exactly one [`SelectionEvent`]; the
    /// returned state drives a single view-model recompute (last write wins).
    pub fn reduce(&self, event: SelectionEvent) -> Self {
        debug!(?event, "reducing selection state");
        let mut next = *self;
        match event {
            SelectionEvent::ModeChanged(mode) => next.mode = mode,
            SelectionEvent::CustomStartChanged(date) => next.custom_start = date,
            SelectionEvent::CustomEndChanged(date) => next.custom_end = date,
        }
        next
    }
}

/// User interactions that alter the period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    ModeChanged(PeriodMode),
    CustomStartChanged(Option<NaiveDate>),
    CustomEndChanged(Option<NaiveDate>),
}

/// The two navigable pages of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
}

/// Navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    OpenDashboard,
    ReturnHome,
}

impl Page {
    /// Two-state navigation machine: Home ⇄ Dashboard.
    pub fn transition(self, event: PageEvent) -> Self {
        match event {
            PageEvent::OpenDashboard => Page::Dashboard,
            PageEvent::ReturnHome => Page::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_mode_wire_values() {
        assert_eq!(serde_json::to_string(&PeriodMode::LastMonth).unwrap(), "\"1M\"");
        assert_eq!(serde_json::to_string(&PeriodMode::Custom).unwrap(), "\"custom\"");
        let parsed: PeriodMode = serde_json::from_str("\"6M\"").unwrap();
        assert_eq!(parsed, PeriodMode::Last6Months);
    }

    #[test]
    fn test_period_mode_from_str_round_trip() {
        for mode in PeriodMode::ALL {
            assert_eq!(mode.as_str().parse::<PeriodMode>().unwrap(), mode);
        }
        assert!("2W".parse::<PeriodMode>().is_err());
    }

    #[test]
    fn test_default_mode_is_last_month() {
        assert_eq!(PeriodMode::default(), PeriodMode::LastMonth);
        assert_eq!(SelectionState::default().mode, PeriodMode::LastMonth);
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(date(2023, 3, 1), date(2023, 3, 10));
        assert!(range.contains(date(2023, 3, 1)));
        assert!(range.contains(date(2023, 3, 10)));
        assert!(!range.contains(date(2023, 2, 28)));
        assert!(!range.contains(date(2023, 3, 11)));
        assert_eq!(range.day_count(), 10);
    }

    #[test]
    fn test_reduce_mode_change_keeps_custom_dates() {
        let state = SelectionState {
            mode: PeriodMode::Custom,
            custom_start: Some(date(2023, 1, 1)),
            custom_end: Some(date(2023, 2, 1)),
        };
        let next = state.reduce(SelectionEvent::ModeChanged(PeriodMode::LastYear));
        assert_eq!(next.mode, PeriodMode::LastYear);
        assert_eq!(next.custom_start, Some(date(2023, 1, 1)));
        assert_eq!(next.custom_end, Some(date(2023, 2, 1)));
    }

    #[test]
    fn test_reduce_custom_dates() {
        let state = SelectionState::new(PeriodMode::Custom);
        let next = state
            .reduce(SelectionEvent::CustomStartChanged(Some(date(2023, 5, 1))))
            .reduce(SelectionEvent::CustomEndChanged(Some(date(2023, 5, 31))));
        assert_eq!(next.custom_start, Some(date(2023, 5, 1)));
        assert_eq!(next.custom_end, Some(date(2023, 5, 31)));

        // clearing a picker is also an event
        let cleared = next.reduce(SelectionEvent::CustomEndChanged(None));
        assert_eq!(cleared.custom_end, None);
    }

    #[test]
    fn test_page_transitions() {
        assert_eq!(Page::Home.transition(PageEvent::OpenDashboard), Page::Dashboard);
        assert_eq!(Page::Dashboard.transition(PageEvent::ReturnHome), Page::Home);
        // transitions are idempotent on the target state
        assert_eq!(Page::Dashboard.transition(PageEvent::OpenDashboard), Page::Dashboard);
    }
}
