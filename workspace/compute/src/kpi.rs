//! KPI scalars derived from the filtered slice.

use model::TimeSeriesPoint;
use rust_decimal::Decimal;

use crate::forecast::ForecastPoint;

/// Forward-forecast values strictly above this flag an alert, MWh.
pub const ALERT_THRESHOLD_MWH: i64 = 520;

/// Cost per MWh-equivalent, EUR.
fn cost_rate() -> Decimal {
    Decimal::new(15, 2) // 0.15
}

/// CO₂ per MWh-equivalent, tonnes.
fn co2_rate() -> Decimal {
    Decimal::new(1, 4) // 0.0001
}

/// Total cost over the slice: `Σ real × 0.15`, rounded to 2 decimals.
/// An empty slice yields exactly zero.
pub fn total_cost(slice: &[TimeSeriesPoint]) -> Decimal {
    (Decimal::from(total_real_mwh(slice)) * cost_rate()).round_dp(2)
}

/// Total CO₂ over the slice: `Σ real × 0.0001`, rounded to 2 decimals.
pub fn total_co2(slice: &[TimeSeriesPoint]) -> Decimal {
    (Decimal::from(total_real_mwh(slice)) * co2_rate()).round_dp(2)
}

/// Number of forward-forecast points above [`ALERT_THRESHOLD_MWH`].
pub fn count_alerts(forward: &[ForecastPoint]) -> u32 {
    forward
        .iter()
        .filter(|point| point.expected_mwh > ALERT_THRESHOLD_MWH)
        .count() as u32
}

/// Render a KPI amount with thousands separators and two decimals,
/// e.g. `8123.4` → `"8,123.40"`.
pub fn format_grouped(value: Decimal) -> String {
    let rendered = format!("{value:.2}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

fn total_real_mwh(slice: &[TimeSeriesPoint]) -> i64 {
    slice.iter().map(|point| point.real_mwh).sum()
}
