use crate::models::table::{AnnualRow, MonthlyRow};
use crate::services::selection_service::FilteredView;

/// Projects a filtered view into sorted row sets for the two table views.
///
/// Rows are explicit typed structs built field by field — no runtime
/// shape merging — and carry their negative-margin flag precomputed.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// One row per (asset, year, month) surviving selection, sorted by
    /// year descending then month descending. Both comparisons are
    /// numeric; the sort is stable, so rows that tie keep their input
    /// order.
    pub fn monthly_rows(&self, view: &FilteredView<'_>) -> Vec<MonthlyRow> {
        let mut rows = Vec::new();

        for asset in &view.assets {
            for year in &asset.years {
                for month in &year.months {
                    rows.push(MonthlyRow {
                        asset: asset.display_name.to_string(),
                        year: year.year,
                        month: month.month,
                        month_name: month.month_name.clone(),
                        ricavi: month.ricavi,
                        costi_personale: month.costi_personale,
                        costi_produzione: month.costi_produzione,
                        costi_gestione: month.costi_gestione,
                        costi_commerciale: month.costi_commerciale,
                        costi_totale: month.costi_totale,
                        margine: month.margine,
                        margine_pct: month.margine_pct,
                        negative_margin: month.margine < 0.0,
                    });
                }
            }
        }

        rows.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| b.month.cmp(&a.month)));
        rows
    }

    /// One row per (asset, year) surviving the asset/year filters,
    /// sorted by year descending. The month filter does not apply here.
    pub fn annual_rows(&self, view: &FilteredView<'_>) -> Vec<AnnualRow> {
        let mut rows = Vec::new();

        for asset in &view.assets {
            for year in &asset.years {
                rows.push(AnnualRow {
                    asset: asset.display_name.to_string(),
                    year: year.year,
                    ricavi_annuali: year.record.ricavi_annuali,
                    costi_annuali: year.record.costi_annuali,
                    margine_annuale: year.record.margine_annuale,
                    margine_pct: year.record.margine_pct,
                    negative_margin: year.record.margine_annuale < 0.0,
                });
            }
        }

        rows.sort_by(|a, b| b.year.cmp(&a.year));
        rows
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}
