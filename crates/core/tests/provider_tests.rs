// ═══════════════════════════════════════════════════════════════════
// Provider Tests — HttpSummarySource envelope protocol, health probe
// ═══════════════════════════════════════════════════════════════════

use finance_dashboard_core::errors::CoreError;
use finance_dashboard_core::models::settings::SourceSettings;
use finance_dashboard_core::providers::http::HttpSummarySource;
use finance_dashboard_core::providers::traits::{HealthStatus, SummarySource};

// ── Construction ────────────────────────────────────────────────────

mod construction {
    use super::*;

    #[test]
    fn default_settings_point_at_localhost() {
        let settings = SourceSettings::default();
        assert_eq!(settings.base_url, "http://localhost:5000");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let settings = SourceSettings {
            base_url: "https://example.test/".to_string(),
            ..Default::default()
        };
        let source = HttpSummarySource::new(&settings);
        assert_eq!(source.base_url(), "https://example.test");
    }

    #[test]
    fn source_has_a_name() {
        let source = HttpSummarySource::new(&SourceSettings::default());
        assert!(!source.name().is_empty());
    }
}

// ── Summary envelope ────────────────────────────────────────────────

mod summary_envelope {
    use super::*;

    #[test]
    fn successful_envelope_yields_dataset() {
        let body = r#"{
            "success": true,
            "data": {
                "years": [2024],
                "assets": {"HOTEL": {"info": {"display_name": "Grand Hotel"}, "years": {}}},
                "totals": {}
            }
        }"#;
        let dataset = HttpSummarySource::parse_summary(body).unwrap();
        assert_eq!(dataset.years, vec![2024]);
        assert_eq!(dataset.assets.len(), 1);
    }

    #[test]
    fn failure_envelope_surfaces_the_error_message() {
        let body = r#"{"success": false, "error": "database unavailable"}"#;
        match HttpSummarySource::parse_summary(body) {
            Err(CoreError::LoadFailed(msg)) => assert_eq!(msg, "database unavailable"),
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn failure_envelope_without_message_still_fails() {
        let body = r#"{"success": false}"#;
        assert!(matches!(
            HttpSummarySource::parse_summary(body),
            Err(CoreError::LoadFailed(_))
        ));
    }

    #[test]
    fn success_without_data_is_a_load_failure() {
        let body = r#"{"success": true}"#;
        assert!(matches!(
            HttpSummarySource::parse_summary(body),
            Err(CoreError::LoadFailed(_))
        ));
    }

    #[test]
    fn malformed_body_is_a_deserialization_error() {
        assert!(matches!(
            HttpSummarySource::parse_summary("not json at all"),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn missing_success_flag_defaults_to_failure() {
        let body = r#"{"data": {"years": []}}"#;
        assert!(matches!(
            HttpSummarySource::parse_summary(body),
            Err(CoreError::LoadFailed(_))
        ));
    }
}

// ── Health probe ────────────────────────────────────────────────────

mod health {
    use super::*;

    #[test]
    fn healthy_status_means_connected() {
        let body = r#"{"status": "healthy", "database": "connected"}"#;
        assert_eq!(HttpSummarySource::parse_health(body), HealthStatus::Connected);
    }

    #[test]
    fn unhealthy_status_means_unreachable() {
        let body = r#"{"status": "unhealthy", "error": "timeout"}"#;
        assert_eq!(
            HttpSummarySource::parse_health(body),
            HealthStatus::Unreachable
        );
    }

    #[test]
    fn garbage_body_means_unreachable() {
        assert_eq!(
            HttpSummarySource::parse_health("<html>502</html>"),
            HealthStatus::Unreachable
        );
    }

    #[test]
    fn status_helpers() {
        assert!(HealthStatus::Connected.is_connected());
        assert!(!HealthStatus::Unreachable.is_connected());
        assert_eq!(HealthStatus::Connected.to_string(), "connected");
        assert_eq!(HealthStatus::Unreachable.to_string(), "unreachable");
    }
}
