use serde::{Deserialize, Serialize};

/// Chart series always span a full calendar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Fixed x-axis labels, matching the source data's locale.
pub const MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
];

/// One asset's line in a chart: a 12-slot numeric array indexed by
/// month − 1, plus the legend label and the asset's stable color.
///
/// Months missing from the source contribute a `0.0` at their index so
/// the x-axis stays aligned across all assets and all 12 months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLine {
    pub asset_key: String,

    /// Legend label (the asset's display name)
    pub label: String,

    /// Hex color, deterministic per asset key
    pub color: String,

    pub points: [f64; MONTHS_PER_YEAR],
}
