use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Deserialize a numeric field leniently: `null` and absent both become `0.0`,
/// so a sparse source row never aborts a load or a derivation pass.
fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One month of revenue/cost line items for a single asset.
///
/// Field names follow the wire format of the summary document.
/// `margine_pct` stays `None` when the source could not compute it
/// (zero revenue); absent is distinct from `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Calendar month, 1..=12
    #[serde(default)]
    pub month: u32,

    /// Localized month label as delivered by the source (e.g., "Gennaio")
    #[serde(default)]
    pub month_name: String,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub ricavi: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_personale: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_produzione: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_gestione: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_commerciale: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_totale: f64,

    /// ricavi − costi_totale, precomputed by the source
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub margine: f64,

    /// margine / ricavi × 100, absent when ricavi is zero
    #[serde(default)]
    pub margine_pct: Option<f64>,
}

/// One year of an asset: annual aggregates plus the month records they
/// were aggregated from. `months_data` ideally holds 12 entries but may
/// be sparse or unordered, so consumers index by `MonthRecord::month`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub ricavi_annuali: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_annuali: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub margine_annuale: f64,

    #[serde(default)]
    pub margine_pct: Option<f64>,

    #[serde(default)]
    pub months_data: Vec<MonthRecord>,
}

/// Descriptive fields of an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Human-readable name shown in tables and chart legends
    #[serde(default)]
    pub display_name: String,
}

/// A managed property/business unit (e.g., a hotel) whose financials
/// are tracked independently, keyed by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub info: AssetInfo,

    #[serde(default)]
    pub years: BTreeMap<i32, YearRecord>,
}

/// Dataset-wide aggregates for one year, summed across all assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub ricavi_totali: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub costi_totali: f64,

    #[serde(default, deserialize_with = "f64_or_zero")]
    pub margine_totale: f64,

    #[serde(default)]
    pub margine_pct: Option<f64>,
}

/// Asset key → [`Asset`] mapping that preserves document order.
///
/// The order assets appear in the summary document is presentation-
/// significant (chart legend and table grouping follow it), so a plain
/// `HashMap` won't do. Lookups are linear; the dataset holds a handful
/// of assets, never thousands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetMap {
    entries: Vec<(String, Asset)>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset. An existing key is overwritten in place, keeping
    /// its original position (JSON object semantics).
    pub fn insert(&mut self, key: impl Into<String>, asset: Asset) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = asset,
            None => self.entries.push((key, asset)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, asset)| asset)
    }

    /// Iterate entries in document (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Asset)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (String, Asset)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, asset) in iter {
            map.insert(key, asset);
        }
        map
    }
}

impl Serialize for AssetMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, asset) in &self.entries {
            map.serialize_entry(key, asset)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AssetMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssetMapVisitor;

        impl<'de> Visitor<'de> for AssetMapVisitor {
            type Value = AssetMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of asset key to asset")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AssetMap::new();
                while let Some((key, asset)) = access.next_entry::<String, Asset>()? {
                    map.insert(key, asset);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AssetMapVisitor)
    }
}

/// One complete, immutable load of the raw dashboard data:
/// assets → years → months, plus dataset-wide totals per year.
///
/// The dataset is never patched incrementally: a fresh load replaces
/// it wholesale (see [`crate::state::SnapshotStore`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Year list exactly as received; ordering is presentation-significant
    #[serde(default)]
    pub years: Vec<i32>,

    /// Assets in document order
    #[serde(default)]
    pub assets: AssetMap,

    /// Group totals keyed by year
    #[serde(default)]
    pub totals: BTreeMap<i32, Totals>,
}

impl Dataset {
    /// The maximum year present in the dataset, regardless of the order
    /// the source delivered the list in.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.iter().copied().max()
    }
}
