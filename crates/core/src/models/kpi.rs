use serde::{Deserialize, Serialize};

/// Which headline indicator a [`Kpi`] carries.
/// The dashboard shows exactly four, always in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiKind {
    Revenue,
    Cost,
    Margin,
    MarginPct,
}

impl KpiKind {
    /// Card label, matching the source data's locale.
    pub fn label(self) -> &'static str {
        match self {
            KpiKind::Revenue => "Ricavi Totali",
            KpiKind::Cost => "Costi Totali",
            KpiKind::Margin => "Margine Totale",
            KpiKind::MarginPct => "Margine %",
        }
    }
}

/// A period-over-period change, ready for rendering.
///
/// Currency indicators carry a relative change (`"+20.0%"`); the margin-%
/// indicator carries a percentage-point difference (`"+5.0pp"`) — a
/// different unit that never shares the relative-percent formatting path.
/// "No comparison available" is modeled as the absence of a `Delta`,
/// never as zero, infinity or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Raw magnitude (percent or percentage points, depending on the KPI)
    pub value: f64,

    /// Rendering per the core rounding contract: explicit sign, one decimal
    pub display: String,

    /// `true` for a change ≥ 0 (drives positive/negative styling)
    pub positive: bool,
}

/// One headline indicator for the target year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub kind: KpiKind,

    /// The target year the value belongs to
    pub year: i32,

    /// Card title, e.g., "Ricavi Totali 2024"
    pub title: String,

    /// Raw value; `None` when the source could not compute it
    /// (margin % with zero revenue)
    pub value: Option<f64>,

    /// Rounded per the core contract: integer currency, one-decimal
    /// percentage. Empty when `value` is absent.
    pub display: String,

    /// Year-over-year change vs. the arithmetic predecessor year,
    /// absent when no comparison is available
    pub change: Option<Delta>,
}
