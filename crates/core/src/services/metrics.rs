use crate::models::kpi::Delta;

/// Relative period-over-period change: `((current − previous) / previous) × 100`.
///
/// Returns `None` when `previous` is absent or zero — "no comparison
/// available" is a value, never `+Infinity%` or `NaN%`.
pub fn change(current: f64, previous: Option<f64>) -> Option<Delta> {
    let previous = previous?;
    if previous == 0.0 {
        return None;
    }
    let pct = ((current - previous) / previous) * 100.0;
    Some(Delta {
        value: pct,
        display: format_signed(pct, "%"),
        positive: pct >= 0.0,
    })
}

/// Percentage-point difference between two percentage values.
///
/// A plain arithmetic difference in points — intentionally a different
/// unit from the relative change of currency metrics, with its own `pp`
/// suffix. Returns `None` unless both values are present.
pub fn point_delta(current: Option<f64>, previous: Option<f64>) -> Option<Delta> {
    let diff = current? - previous?;
    Some(Delta {
        value: diff,
        display: format_signed(diff, "pp"),
        positive: diff >= 0.0,
    })
}

/// Currency rounding contract: integer, no decimals.
/// Locale decoration (symbol, thousands separators) belongs to the
/// presentation layer.
pub fn format_currency(value: f64) -> String {
    format!("{value:.0}")
}

/// Percentage rounding contract: one decimal place.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed rendering with one decimal: `+` for ≥ 0, the number's own
/// `-` otherwise.
fn format_signed(value: f64, unit: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}{unit}")
}
