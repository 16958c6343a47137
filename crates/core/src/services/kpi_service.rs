use crate::models::dataset::Dataset;
use crate::models::filter::FilterContext;
use crate::models::kpi::{Kpi, KpiKind};
use crate::services::metrics;

/// Produces the four headline indicators for the target year vs. its
/// arithmetic predecessor.
///
/// Target year = the selected year if set, else the maximum year in the
/// dataset. Comparison year = target − 1, always — if 2023 is absent
/// from the dataset while the target is 2024, every delta is simply
/// "no comparison available", not a fall-back to 2022.
pub struct KpiService;

impl KpiService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the KPI set. Empty when the dataset carries no years or
    /// the target year has no totals entry — nothing to show, not an
    /// error.
    pub fn compute(&self, dataset: &Dataset, filter: &FilterContext) -> Vec<Kpi> {
        let target = match filter.year.or_else(|| dataset.latest_year()) {
            Some(year) => year,
            None => return Vec::new(),
        };

        let current = match dataset.totals.get(&target) {
            Some(totals) => totals,
            None => return Vec::new(),
        };
        let previous = dataset.totals.get(&(target - 1));

        vec![
            currency_kpi(
                KpiKind::Revenue,
                target,
                current.ricavi_totali,
                previous.map(|p| p.ricavi_totali),
            ),
            currency_kpi(
                KpiKind::Cost,
                target,
                current.costi_totali,
                previous.map(|p| p.costi_totali),
            ),
            currency_kpi(
                KpiKind::Margin,
                target,
                current.margine_totale,
                previous.map(|p| p.margine_totale),
            ),
            margin_pct_kpi(
                target,
                current.margine_pct,
                previous.and_then(|p| p.margine_pct),
            ),
        ]
    }
}

impl Default for KpiService {
    fn default() -> Self {
        Self::new()
    }
}

/// A currency indicator: integer-rounded value, relative-% delta.
fn currency_kpi(kind: KpiKind, year: i32, value: f64, previous: Option<f64>) -> Kpi {
    Kpi {
        title: format!("{} {year}", kind.label()),
        kind,
        year,
        value: Some(value),
        display: metrics::format_currency(value),
        change: metrics::change(value, previous),
    }
}

/// The margin-% indicator: one-decimal value, percentage-point delta.
/// An absent percentage (zero revenue) renders as empty, not as zero.
fn margin_pct_kpi(year: i32, value: Option<f64>, previous: Option<f64>) -> Kpi {
    Kpi {
        title: format!("{} {year}", KpiKind::MarginPct.label()),
        kind: KpiKind::MarginPct,
        year,
        value,
        display: value.map(metrics::format_pct).unwrap_or_default(),
        change: metrics::point_delta(value, previous),
    }
}
