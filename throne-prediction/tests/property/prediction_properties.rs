use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::at;
use throne_core::SessionEvent;
use throne_prediction::histogram::circular_distance;
use throne_prediction::insights::{get_insights, InsightType};
use throne_prediction::predictor::{self, predict_next_session_at};
use throne_prediction::build_model;

fn arb_events(max: usize) -> impl Strategy<Value = Vec<SessionEvent>> {
    prop::collection::vec((0i64..90, 0i64..1440, any::<bool>()), 0..max).prop_map(|raw| {
        raw.into_iter()
            .map(|(day, minute, completed)| SessionEvent {
                occurred_at: at(day, 0, 0) + Duration::minutes(minute),
                completed,
            })
            .collect()
    })
}

// ── Histogram invariants ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn histogram_shape_and_sign(events in arb_events(200)) {
        let model = build_model(&events, at(90, 0, 0));
        let weights = model.histogram().weights();
        prop_assert_eq!(weights.len(), 96);
        prop_assert!(weights.iter().all(|w| *w >= 0.0 && w.is_finite()));
        let completed = events.iter().filter(|e| e.completed).count();
        prop_assert_eq!(model.total_sessions(), completed);
        prop_assert_eq!(model.histogram().total() == 0.0, completed == 0);
    }

    #[test]
    fn build_is_order_independent(events in arb_events(120), rotation in 0usize..120) {
        let now = at(90, 0, 0);
        let mut shuffled = events.clone();
        if !shuffled.is_empty() {
            let k = rotation % shuffled.len();
            shuffled.rotate_left(k);
            shuffled.reverse();
        }
        let a = build_model(&events, now);
        let b = build_model(&shuffled, now);
        let bits = |m: &throne_prediction::PredictionModel| -> Vec<u64> {
            m.histogram().weights().iter().map(|w| w.to_bits()).collect()
        };
        prop_assert_eq!(bits(&a), bits(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn circular_distance_is_symmetric_and_bounded(i in 0usize..96, j in 0usize..96) {
        let d = circular_distance(i, j);
        prop_assert_eq!(d, circular_distance(j, i));
        prop_assert!(d <= 48);
        prop_assert_eq!(d == 0, i == j);
    }
}

// ── Predictor invariants ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_is_bounded(events in arb_events(150), bucket in 0usize..96, radius in 0usize..10) {
        let model = build_model(&events, at(90, 0, 0));
        let c = predictor::confidence(&model, bucket, radius);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn predictions_clear_both_gates(events in arb_events(150), hour in 0u32..24) {
        let model = build_model(&events, at(90, 0, 0));
        let now = at(90, hour, 0);
        if let Some(p) = predict_next_session_at(&model, now) {
            prop_assert!(model.total_sessions() >= 5);
            prop_assert!(p.confidence >= 0.5 && p.confidence <= 1.0);
            prop_assert!(p.predicted_time > now);
            prop_assert!(p.predicted_time <= now + Duration::days(1));
        }
    }

    #[test]
    fn insights_are_ordered_and_unique(events in arb_events(150)) {
        let model = build_model(&events, at(90, 0, 0));
        let insights = get_insights(&model);
        prop_assert!(insights.len() <= 3);
        let rank = |t: InsightType| match t {
            InsightType::PeakTimes => 0,
            InsightType::Regularity => 1,
            InsightType::WeeklyPattern => 2,
        };
        let ranks: Vec<u8> = insights.iter().map(|i| rank(i.insight_type)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(insights.iter().all(|i| !i.message.is_empty()));
    }
}
