pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;

use models::dataset::Dataset;
use models::filter::FilterContext;
use models::views::DashboardViews;
use providers::traits::{HealthStatus, SummarySource};
use services::kpi_service::KpiService;
use services::selection_service::SelectionService;
use services::series_service::SeriesService;
use services::table_service::TableService;
use state::SnapshotStore;

use errors::CoreError;

/// Main entry point for the finance-dashboard core library.
/// Holds the current dataset snapshot and the user's filter selection,
/// and derives every dashboard view from them.
///
/// Every filter mutation triggers one full re-derivation pass: the
/// views are rebuilt from scratch, never patched incrementally.
#[must_use]
pub struct FinanceDashboard {
    store: SnapshotStore,
    filter: FilterContext,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("has_snapshot", &self.store.has_snapshot())
            .field("loaded_at", &self.store.loaded_at())
            .field("filter", &self.filter)
            .finish()
    }
}

impl FinanceDashboard {
    /// Create a dashboard with no snapshot and an empty filter.
    /// Every view is empty until the first successful load.
    pub fn new() -> Self {
        Self {
            store: SnapshotStore::new(),
            filter: FilterContext::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Fetch a fresh snapshot from `source` and swap it in on success.
    ///
    /// On failure the previous snapshot stays authoritative and the
    /// error is surfaced to the caller for the error banner. A result
    /// that arrives after a newer load already committed is discarded
    /// (last-writer-wins on snapshot identity).
    pub async fn refresh(
        &mut self,
        source: &dyn SummarySource,
    ) -> Result<DashboardViews, CoreError> {
        let ticket = self.store.begin_load();
        match source.fetch_summary().await {
            Ok(dataset) => {
                if self.store.commit(ticket, dataset) {
                    log::info!("snapshot installed from {}", source.name());
                } else {
                    log::warn!("discarding stale load result from {}", source.name());
                }
                Ok(self.views())
            }
            Err(e) => {
                log::warn!(
                    "load from {} failed, keeping previous snapshot: {e}",
                    source.name()
                );
                Err(e)
            }
        }
    }

    /// Install an already-parsed dataset directly (offline use, tests).
    /// Follows the same ticket discipline as [`Self::refresh`].
    pub fn install_snapshot(&mut self, dataset: Dataset) -> DashboardViews {
        let ticket = self.store.begin_load();
        self.store.commit(ticket, dataset);
        self.views()
    }

    /// Probe the data source's connectivity for the status indicator.
    /// Has no effect on derivation or on the current snapshot.
    pub async fn check_health(&self, source: &dyn SummarySource) -> HealthStatus {
        source.check_health().await
    }

    pub fn has_snapshot(&self) -> bool {
        self.store.has_snapshot()
    }

    /// When the current snapshot was installed, if any.
    pub fn last_loaded_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.store.loaded_at()
    }

    // ── Filters ─────────────────────────────────────────────────────
    // Each setter re-derives the dependent views, the only observable
    // side effect in the core.

    pub fn set_year(&mut self, year: Option<i32>) -> DashboardViews {
        self.filter.set_year(year);
        self.views()
    }

    pub fn set_month(&mut self, month: Option<u32>) -> DashboardViews {
        self.filter.set_month(month);
        self.views()
    }

    pub fn set_asset(&mut self, asset_key: Option<String>) -> DashboardViews {
        self.filter.set_asset(asset_key);
        self.views()
    }

    pub fn clear_filters(&mut self) -> DashboardViews {
        self.filter.clear();
        self.views()
    }

    /// Snapshot of the current selection.
    #[must_use]
    pub fn filter(&self) -> FilterContext {
        self.filter.current()
    }

    // ── Derivation ──────────────────────────────────────────────────

    /// Derive every dashboard view from the current snapshot and filter.
    /// Empty views when no snapshot has been loaded yet.
    #[must_use]
    pub fn views(&self) -> DashboardViews {
        match self.store.current() {
            Some(dataset) => derive_views(&dataset, &self.filter),
            None => DashboardViews::default(),
        }
    }
}

impl Default for FinanceDashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive every dashboard view from one snapshot and one filter context.
///
/// Pure and total: given a dataset and a filter it always produces a
/// result; empty projections are normal values. This is the single
/// derivation pass behind every filter change and every snapshot swap.
pub fn derive_views(dataset: &Dataset, filter: &FilterContext) -> DashboardViews {
    let selection = SelectionService::new().select(dataset, filter);
    let (revenue_series, margin_series) = SeriesService::new().build(dataset, filter);
    let tables = TableService::new();

    DashboardViews {
        kpis: KpiService::new().compute(dataset, filter),
        revenue_series,
        margin_series,
        monthly_rows: tables.monthly_rows(&selection),
        annual_rows: tables.annual_rows(&selection),
    }
}
