use serde::{Deserialize, Serialize};

/// One row of the monthly table: an (asset, year, month) that survived
/// filtering, carrying every monetary field of the month record.
///
/// Built by construction — the projector copies each field explicitly
/// instead of merging record shapes at runtime, so a row's contents are
/// unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Asset display name
    pub asset: String,

    pub year: i32,

    /// Calendar month, used for sorting
    pub month: u32,

    /// Localized month label, used for display
    pub month_name: String,

    pub ricavi: f64,
    pub costi_personale: f64,
    pub costi_produzione: f64,
    pub costi_gestione: f64,
    pub costi_commerciale: f64,
    pub costi_totale: f64,
    pub margine: f64,
    pub margine_pct: Option<f64>,

    /// Computed once at projection; the presentation layer applies
    /// negative styling without re-evaluating the number.
    pub negative_margin: bool,
}

/// One row of the annual table: an (asset, year) with the year's
/// aggregates. The month filter does not apply to this projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRow {
    /// Asset display name
    pub asset: String,

    pub year: i32,

    pub ricavi_annuali: f64,
    pub costi_annuali: f64,
    pub margine_annuale: f64,
    pub margine_pct: Option<f64>,

    /// Computed once at projection, like [`MonthlyRow::negative_margin`]
    pub negative_margin: bool,
}
