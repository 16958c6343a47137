use serde::{Deserialize, Serialize};

use super::kpi::Kpi;
use super::series::SeriesLine;
use super::table::{AnnualRow, MonthlyRow};

/// Everything the presentation layer renders, derived in one pass from a
/// single snapshot and filter context.
///
/// The core computes all the numbers — the frontend only renders.
/// Any of these collections may legitimately be empty (a filter matching
/// nothing is a normal value, not an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    /// The four headline indicators, or empty when the target year has
    /// no totals entry
    pub kpis: Vec<Kpi>,

    /// One revenue line per included asset, 12 points each
    pub revenue_series: Vec<SeriesLine>,

    /// One margin-% line per included asset, 12 points each
    pub margin_series: Vec<SeriesLine>,

    /// Monthly table rows, year desc then month desc
    pub monthly_rows: Vec<MonthlyRow>,

    /// Annual table rows, year desc
    pub annual_rows: Vec<AnnualRow>,
}

impl DashboardViews {
    /// `true` when no projection produced any output — either no snapshot
    /// is loaded yet or the filter matches nothing.
    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
            && self.revenue_series.is_empty()
            && self.margin_series.is_empty()
            && self.monthly_rows.is_empty()
            && self.annual_rows.is_empty()
    }
}
