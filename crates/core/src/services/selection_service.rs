use crate::models::dataset::{Dataset, MonthRecord, YearRecord};
use crate::models::filter::FilterContext;

/// One year of an included asset, with the month records that survived
/// the month filter and the zero-activity exclusion.
///
/// `record` still carries the full `months_data`: chart series read it
/// directly because they bypass the month stage (a month with no data
/// must still contribute a zero at its index).
#[derive(Debug)]
pub struct FilteredYear<'a> {
    pub year: i32,
    pub record: &'a YearRecord,
    pub months: Vec<&'a MonthRecord>,
}

/// An asset that survived the asset filter, with its filtered years.
/// When the year filter names a year the asset has no record for,
/// `years` is simply empty and the asset contributes nothing.
#[derive(Debug)]
pub struct FilteredAsset<'a> {
    pub key: &'a str,
    pub display_name: &'a str,
    pub years: Vec<FilteredYear<'a>>,
}

/// The dataset narrowed by a filter context, in document order.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub assets: Vec<FilteredAsset<'a>>,
}

/// Walks the dataset applying the filter context. This is the single place the
/// filtering rules live.
///
/// Rules:
/// - an asset is included iff the asset filter is unset or names it;
/// - a year is included iff the year filter is unset or equals it;
/// - a month is included iff the month filter is unset or equals it,
///   AND the month has nonzero revenue or nonzero total cost.
///
/// The zero-activity exclusion applies to the monthly table projection
/// only; annual aggregates and chart series are unaffected.
pub struct SelectionService;

impl SelectionService {
    pub fn new() -> Self {
        Self
    }

    /// Narrow `dataset` to the subset the filter selects. Borrows the
    /// snapshot; nothing is cloned until a projector builds rows.
    pub fn select<'a>(&self, dataset: &'a Dataset, filter: &FilterContext) -> FilteredView<'a> {
        let mut assets = Vec::new();

        for (key, asset) in dataset.assets.iter() {
            if !filter.matches_asset(key) {
                continue;
            }

            let mut years = Vec::new();
            for (&year, record) in &asset.years {
                if !filter.matches_year(year) {
                    continue;
                }

                let months = record
                    .months_data
                    .iter()
                    .filter(|m| filter.matches_month(m.month) && Self::has_activity(m))
                    .collect();

                years.push(FilteredYear {
                    year,
                    record,
                    months,
                });
            }

            assets.push(FilteredAsset {
                key,
                display_name: &asset.info.display_name,
                years,
            });
        }

        FilteredView { assets }
    }

    /// A month with all-zero figures is "no data", not a real zero row.
    fn has_activity(month: &MonthRecord) -> bool {
        month.ricavi != 0.0 || month.costi_totale != 0.0
    }
}

impl Default for SelectionService {
    fn default() -> Self {
        Self::new()
    }
}
