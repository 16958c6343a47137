use serde::{Deserialize, Serialize};

/// The user's current year / month / asset selection.
///
/// All three dimensions are independent; `None` means "include all".
/// The context is a small value type — every render pass works on a copy,
/// so filter changes while a load is in flight never race the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterContext {
    pub year: Option<i32>,

    /// Calendar month, 1..=12
    pub month: Option<u32>,

    pub asset_key: Option<String>,
}

impl FilterContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn set_month(&mut self, month: Option<u32>) {
        self.month = month;
    }

    pub fn set_asset(&mut self, asset_key: Option<String>) {
        self.asset_key = asset_key;
    }

    /// Reset all three dimensions to "include all".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the current selection.
    pub fn current(&self) -> Self {
        self.clone()
    }

    // ── Matching helpers used by the selection engine ───────────────

    pub fn matches_year(&self, year: i32) -> bool {
        self.year.is_none_or(|y| y == year)
    }

    pub fn matches_month(&self, month: u32) -> bool {
        self.month.is_none_or(|m| m == month)
    }

    pub fn matches_asset(&self, asset_key: &str) -> bool {
        self.asset_key.as_deref().is_none_or(|k| k == asset_key)
    }
}
