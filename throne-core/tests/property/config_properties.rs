use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use throne_core::config::{InsightConfig, PredictionConfig, ThroneConfig};
use throne_core::session::{completed_events, SessionRecord};

fn arb_prediction_config() -> impl Strategy<Value = PredictionConfig> {
    (
        0.5f64..=1.0,
        1usize..50,
        0.0f64..=1.0,
        0u32..120,
        -1080i32..=1080,
        1.0f64..4.0,
        0usize..48,
    )
        .prop_map(
            |(lambda, min_sessions, threshold, lead, offset, margin, radius)| PredictionConfig {
                decay_lambda: lambda,
                min_sessions_for_prediction: min_sessions,
                confidence_threshold: threshold,
                notification_lead_minutes: lead,
                utc_offset_minutes: offset,
                significance_margin: margin,
                confidence_window_radius: radius,
            },
        )
}

fn arb_insight_config() -> impl Strategy<Value = InsightConfig> {
    (0usize..50, 1.0f64..5.0, 0.0f64..=1.0, 0usize..5, 1.0f64..240.0, 1.0f64..4.0, 0.001f64..=1.0)
        .prop_map(
            |(min_sessions, multiplier, share, peaks, regularity, weekday, significance)| {
                InsightConfig {
                    min_sessions,
                    peak_multiplier: multiplier,
                    peak_min_share: share,
                    max_peaks: peaks,
                    regularity_threshold_minutes: regularity,
                    weekday_multiplier: weekday,
                    pattern_significance: significance,
                }
            },
        )
}

fn arb_record() -> impl Strategy<Value = SessionRecord> {
    (0i64..10_000, prop::option::of(1i64..180), any::<bool>()).prop_map(
        |(minute, duration, quick)| {
            let started_at = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap()
                + Duration::minutes(minute);
            SessionRecord {
                id: format!("s-{minute}"),
                user_id: "user-1".to_string(),
                started_at,
                ended_at: duration.map(|m| started_at + Duration::minutes(m)),
                duration_seconds: duration.map(|m| m * 60),
                is_quick_log: quick,
                notes: None,
                rating: None,
            }
        },
    )
}

proptest! {
    #[test]
    fn in_range_config_validates_and_roundtrips(
        prediction in arb_prediction_config(),
        insights in arb_insight_config(),
    ) {
        let config = ThroneConfig {
            prediction,
            insights,
            ..Default::default()
        };
        prop_assert!(config.validate().is_ok());

        let toml_str = config.to_toml().unwrap();
        let loaded = ThroneConfig::load(&toml_str).unwrap();
        prop_assert_eq!(loaded, config);
    }

    #[test]
    fn offset_beyond_eighteen_hours_is_rejected(offset in 1081i32..100_000, negative in any::<bool>()) {
        let config = PredictionConfig {
            utc_offset_minutes: if negative { -offset } else { offset },
            ..Default::default()
        };
        prop_assert!(config.validate().is_err());
        prop_assert_eq!(config.utc_offset().local_minus_utc() % 60, 0);
    }

    #[test]
    fn completed_events_keep_only_finished_sessions(records in prop::collection::vec(arb_record(), 0..40)) {
        let events = completed_events(&records);
        let finished: Vec<&SessionRecord> = records
            .iter()
            .filter(|r| r.ended_at.is_some())
            .collect();
        prop_assert_eq!(events.len(), finished.len());
        for (event, record) in events.iter().zip(finished) {
            prop_assert!(event.completed);
            prop_assert_eq!(event.occurred_at, record.started_at);
        }
    }
}
