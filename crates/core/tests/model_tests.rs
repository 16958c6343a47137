// ═══════════════════════════════════════════════════════════════════
// Model Tests — Dataset deserialization leniency, AssetMap ordering,
// FilterContext matching
// ═══════════════════════════════════════════════════════════════════

use finance_dashboard_core::models::dataset::{
    Asset, AssetInfo, AssetMap, Dataset, MonthRecord, Totals, YearRecord,
};
use finance_dashboard_core::models::filter::FilterContext;

const EPSILON: f64 = 1e-9;

// ═══════════════════════════════════════════════════════════════════
//  MonthRecord
// ═══════════════════════════════════════════════════════════════════

mod month_record {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "month": 7,
            "month_name": "Luglio",
            "ricavi": 50000.0,
            "costi_personale": 12000.0,
            "costi_produzione": 8000.0,
            "costi_gestione": 6000.0,
            "costi_commerciale": 4000.0,
            "costi_totale": 30000.0,
            "margine": 20000.0,
            "margine_pct": 40.0
        }"#;
        let m: MonthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.month, 7);
        assert_eq!(m.month_name, "Luglio");
        assert!((m.ricavi - 50000.0).abs() < EPSILON);
        assert!((m.costi_totale - 30000.0).abs() < EPSILON);
        assert_eq!(m.margine_pct, Some(40.0));
    }

    #[test]
    fn missing_numeric_fields_become_zero() {
        let m: MonthRecord = serde_json::from_str(r#"{"month": 3}"#).unwrap();
        assert_eq!(m.ricavi, 0.0);
        assert_eq!(m.costi_personale, 0.0);
        assert_eq!(m.costi_totale, 0.0);
        assert_eq!(m.margine, 0.0);
    }

    #[test]
    fn null_numeric_fields_become_zero() {
        let json = r#"{"month": 3, "ricavi": null, "costi_totale": null}"#;
        let m: MonthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.ricavi, 0.0);
        assert_eq!(m.costi_totale, 0.0);
    }

    #[test]
    fn null_margine_pct_stays_absent() {
        let json = r#"{"month": 3, "margine_pct": null}"#;
        let m: MonthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.margine_pct, None);
    }

    #[test]
    fn missing_margine_pct_stays_absent() {
        let m: MonthRecord = serde_json::from_str(r#"{"month": 3}"#).unwrap();
        assert_eq!(m.margine_pct, None);
    }

    #[test]
    fn absent_pct_is_distinct_from_zero_pct() {
        let absent: MonthRecord = serde_json::from_str(r#"{"month": 1}"#).unwrap();
        let zero: MonthRecord =
            serde_json::from_str(r#"{"month": 1, "margine_pct": 0.0}"#).unwrap();
        assert_eq!(absent.margine_pct, None);
        assert_eq!(zero.margine_pct, Some(0.0));
        assert_ne!(absent, zero);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AssetMap
// ═══════════════════════════════════════════════════════════════════

mod asset_map {
    use super::*;

    fn named(display_name: &str) -> Asset {
        Asset {
            info: AssetInfo {
                display_name: display_name.to_string(),
            },
            years: Default::default(),
        }
    }

    #[test]
    fn preserves_document_order() {
        // Keys deliberately out of alphabetical order
        let json = r#"{
            "ZETA": {"info": {"display_name": "Zeta"}},
            "ALFA": {"info": {"display_name": "Alfa"}},
            "MEDIO": {"info": {"display_name": "Medio"}}
        }"#;
        let map: AssetMap = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["ZETA", "ALFA", "MEDIO"]);
    }

    #[test]
    fn get_finds_by_key() {
        let mut map = AssetMap::new();
        map.insert("HOTEL", named("Hotel"));
        assert_eq!(map.get("HOTEL").unwrap().info.display_name, "Hotel");
        assert!(map.get("MISSING").is_none());
    }

    #[test]
    fn duplicate_insert_keeps_position() {
        let mut map = AssetMap::new();
        map.insert("A", named("first"));
        map.insert("B", named("second"));
        map.insert("A", named("replaced"));

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(map.get("A").unwrap().info.display_name, "replaced");
    }

    #[test]
    fn serialization_round_trips_in_order() {
        let mut map = AssetMap::new();
        map.insert("ZETA", named("Zeta"));
        map.insert("ALFA", named("Alfa"));

        let json = serde_json::to_string(&map).unwrap();
        let back: AssetMap = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = back.keys().collect();
        assert_eq!(keys, vec!["ZETA", "ALFA"]);
    }

    #[test]
    fn from_iterator_builds_in_order() {
        let map: AssetMap = vec![
            ("B".to_string(), named("b")),
            ("A".to_string(), named("a")),
        ]
        .into_iter()
        .collect();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Dataset
// ═══════════════════════════════════════════════════════════════════

mod dataset {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "years": [2024, 2023],
            "assets": {
                "HOTEL": {
                    "info": {"display_name": "Grand Hotel"},
                    "years": {
                        "2024": {
                            "ricavi_annuali": 120000.0,
                            "costi_annuali": 90000.0,
                            "margine_annuale": 30000.0,
                            "margine_pct": 25.0,
                            "months_data": [
                                {"month": 1, "month_name": "Gennaio", "ricavi": 40000.0,
                                 "costi_totale": 30000.0, "margine": 10000.0, "margine_pct": 25.0},
                                {"month": 2, "month_name": "Febbraio", "ricavi": 80000.0,
                                 "costi_totale": 60000.0, "margine": 20000.0, "margine_pct": 25.0}
                            ]
                        }
                    }
                },
                "CVM": {
                    "info": {"display_name": "Centro Vacanze"},
                    "years": {}
                }
            },
            "totals": {
                "2024": {"ricavi_totali": 120000.0, "costi_totali": 90000.0,
                         "margine_totale": 30000.0, "margine_pct": 25.0},
                "2023": {"ricavi_totali": 100000.0, "costi_totali": 80000.0,
                         "margine_totale": 20000.0, "margine_pct": 20.0}
            }
        }"#
    }

    #[test]
    fn parses_full_document() {
        let ds: Dataset = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(ds.years, vec![2024, 2023]);
        assert_eq!(ds.assets.len(), 2);
        assert_eq!(ds.totals.len(), 2);

        let hotel = ds.assets.get("HOTEL").unwrap();
        assert_eq!(hotel.info.display_name, "Grand Hotel");
        assert_eq!(hotel.years[&2024].months_data.len(), 2);
    }

    #[test]
    fn totals_keyed_by_integer_year() {
        let ds: Dataset = serde_json::from_str(sample_json()).unwrap();
        let t = ds.totals.get(&2024).unwrap();
        assert!((t.ricavi_totali - 120000.0).abs() < EPSILON);
        assert!((t.margine_totale - 30000.0).abs() < EPSILON);
    }

    #[test]
    fn month_margin_invariant_holds_in_fixture() {
        let ds: Dataset = serde_json::from_str(sample_json()).unwrap();
        for (_, asset) in ds.assets.iter() {
            for record in asset.years.values() {
                for m in &record.months_data {
                    assert!(
                        (m.margine - (m.ricavi - m.costi_totale)).abs() < EPSILON,
                        "margine must equal ricavi - costi_totale for month {}",
                        m.month
                    );
                }
            }
        }
    }

    #[test]
    fn latest_year_is_maximum_regardless_of_order() {
        let ds = Dataset {
            years: vec![2022, 2024, 2023],
            ..Default::default()
        };
        assert_eq!(ds.latest_year(), Some(2024));
    }

    #[test]
    fn latest_year_of_empty_dataset_is_none() {
        assert_eq!(Dataset::default().latest_year(), None);
    }

    #[test]
    fn empty_document_parses_to_default() {
        let ds: Dataset = serde_json::from_str("{}").unwrap();
        assert!(ds.years.is_empty());
        assert!(ds.assets.is_empty());
        assert!(ds.totals.is_empty());
    }

    #[test]
    fn year_record_missing_aggregates_become_zero() {
        let json = r#"{"months_data": []}"#;
        let record: YearRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ricavi_annuali, 0.0);
        assert_eq!(record.costi_annuali, 0.0);
        assert_eq!(record.margine_pct, None);
    }

    #[test]
    fn totals_null_pct_stays_absent() {
        let json = r#"{"ricavi_totali": 0.0, "costi_totali": 0.0,
                       "margine_totale": 0.0, "margine_pct": null}"#;
        let t: Totals = serde_json::from_str(json).unwrap();
        assert_eq!(t.margine_pct, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FilterContext
// ═══════════════════════════════════════════════════════════════════

mod filter_context {
    use super::*;

    #[test]
    fn default_includes_everything() {
        let f = FilterContext::new();
        assert!(f.matches_year(1999));
        assert!(f.matches_month(7));
        assert!(f.matches_asset("ANYTHING"));
    }

    #[test]
    fn year_filter_matches_only_its_year() {
        let mut f = FilterContext::new();
        f.set_year(Some(2024));
        assert!(f.matches_year(2024));
        assert!(!f.matches_year(2023));
    }

    #[test]
    fn month_filter_matches_only_its_month() {
        let mut f = FilterContext::new();
        f.set_month(Some(6));
        assert!(f.matches_month(6));
        assert!(!f.matches_month(7));
    }

    #[test]
    fn asset_filter_matches_only_its_key() {
        let mut f = FilterContext::new();
        f.set_asset(Some("HOTEL".to_string()));
        assert!(f.matches_asset("HOTEL"));
        assert!(!f.matches_asset("CVM"));
    }

    #[test]
    fn setters_are_independent() {
        let mut f = FilterContext::new();
        f.set_year(Some(2024));
        f.set_month(Some(3));
        f.set_asset(Some("HOTEL".to_string()));
        f.set_month(None);
        assert_eq!(f.year, Some(2024));
        assert_eq!(f.month, None);
        assert_eq!(f.asset_key.as_deref(), Some("HOTEL"));
    }

    #[test]
    fn clear_resets_all_dimensions() {
        let mut f = FilterContext::new();
        f.set_year(Some(2024));
        f.set_month(Some(3));
        f.set_asset(Some("HOTEL".to_string()));
        f.clear();
        assert_eq!(f, FilterContext::default());
    }

    #[test]
    fn current_returns_equal_copy() {
        let mut f = FilterContext::new();
        f.set_year(Some(2023));
        let copy = f.current();
        assert_eq!(copy, f);
    }
}
