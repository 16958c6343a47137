use crate::models::dataset::{Asset, Dataset};
use crate::models::filter::FilterContext;
use crate::models::series::{SeriesLine, MONTHS_PER_YEAR};

/// Fallback color for asset keys outside the fixed palette.
pub const DEFAULT_SERIES_COLOR: &str = "#667eea";

/// Fixed palette keyed by asset key. Assignment is a total function of
/// asset identity, independent of iteration order, so an asset keeps
/// its color no matter which filter is active.
const ASSET_COLORS: [(&str, &str); 3] = [
    ("HOTEL", "#3b82f6"),
    ("RESIDENCE_ANGELINA", "#10b981"),
    ("CVM", "#f59e0b"),
];

/// Stable color for an asset key; unknown keys get the default.
pub fn asset_color(asset_key: &str) -> &'static str {
    ASSET_COLORS
        .iter()
        .find(|(key, _)| *key == asset_key)
        .map_or(DEFAULT_SERIES_COLOR, |(_, color)| *color)
}

/// Builds month-indexed chart series per asset: one revenue line and
/// one margin-% line, always 12 points each.
///
/// Charts span all 12 months regardless of the month filter, and use
/// the selected year or, when unset, the maximum year of the full
/// dataset. (Unlike the KPI calculator, this builder never looks at
/// year − 1.) An asset with no record for the target year still gets
/// all-zero lines so the legend stays complete.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Build `(revenue, margin_pct)` series sets in asset document order.
    pub fn build(
        &self,
        dataset: &Dataset,
        filter: &FilterContext,
    ) -> (Vec<SeriesLine>, Vec<SeriesLine>) {
        let year = filter.year.or_else(|| dataset.latest_year());

        let mut revenue = Vec::new();
        let mut margin = Vec::new();

        for (key, asset) in dataset.assets.iter() {
            if !filter.matches_asset(key) {
                continue;
            }

            let mut revenue_points = [0.0; MONTHS_PER_YEAR];
            let mut margin_points = [0.0; MONTHS_PER_YEAR];

            if let Some(record) = year.and_then(|y| asset.years.get(&y)) {
                for month in &record.months_data {
                    if let Some(idx) = month_index(month.month) {
                        revenue_points[idx] = month.ricavi;
                        // Absent margin % charts as zero so the axis stays
                        // aligned across all 12 months
                        margin_points[idx] = month.margine_pct.unwrap_or(0.0);
                    }
                }
            }

            revenue.push(line(key, asset, revenue_points));
            margin.push(line(key, asset, margin_points));
        }

        (revenue, margin)
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}

fn line(key: &str, asset: &Asset, points: [f64; MONTHS_PER_YEAR]) -> SeriesLine {
    SeriesLine {
        asset_key: key.to_string(),
        label: asset.info.display_name.clone(),
        color: asset_color(key).to_string(),
        points,
    }
}

/// Zero-based slot for a calendar month; out-of-range records contribute
/// nothing rather than panicking.
fn month_index(month: u32) -> Option<usize> {
    if (1..=MONTHS_PER_YEAR as u32).contains(&month) {
        Some((month - 1) as usize)
    } else {
        None
    }
}
