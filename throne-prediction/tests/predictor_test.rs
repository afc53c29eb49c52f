use chrono::Duration;
use test_fixtures::{at, daily_at, events_at, evenly_spread};
use throne_core::config::PredictionConfig;
use throne_core::SessionEvent;
use throne_prediction::predictor::{self, predict_with, select_bucket};
use throne_prediction::{
    build_model, build_model_with, predict_next_session, predict_next_session_at,
};

fn undecayed() -> PredictionConfig {
    PredictionConfig {
        decay_lambda: 1.0,
        ..Default::default()
    }
}

// ── Gating ────────────────────────────────────────────────────────────────

#[test]
fn four_sessions_never_predict() {
    let model = build_model(&daily_at(4, 7, 30), at(4, 6, 0));
    assert_eq!(model.total_sessions(), 4);
    assert!(predict_next_session(&model).is_none());
}

#[test]
fn five_sharp_sessions_predict_with_confidence() {
    let model = build_model(&daily_at(5, 7, 30), at(5, 6, 0));
    let prediction = predict_next_session(&model).expect("prediction");
    assert!(prediction.confidence > 0.5);
    assert_eq!(prediction.bucket, 30);
}

#[test]
fn empty_model_predicts_nothing() {
    let model = build_model(&[], at(0, 0, 0));
    assert!(predict_next_session(&model).is_none());
    assert!(predict_next_session_at(&model, at(3, 12, 0)).is_none());
    assert_eq!(predictor::confidence(&model, 0, 2), 0.0);
}

// ── Scenarios ─────────────────────────────────────────────────────────────

#[test]
fn morning_habit_predicts_the_same_morning() {
    let events = events_at(&[
        (0, 7, 25),
        (1, 7, 35),
        (2, 7, 30),
        (3, 7, 28),
        (4, 7, 33),
        (5, 7, 27),
    ]);
    let now = at(6, 6, 0);
    let model = build_model(&events, now);
    let prediction = predict_next_session(&model).expect("prediction");

    let target = at(6, 7, 30);
    let error = (prediction.predicted_time - target).num_minutes().abs();
    assert!(error <= 10, "predicted {} vs {}", prediction.predicted_time, target);
    assert!(prediction.confidence >= 0.7, "confidence {}", prediction.confidence);
}

#[test]
fn scattered_sessions_are_not_predictable() {
    let events = events_at(&[
        (0, 2, 10),
        (1, 8, 45),
        (2, 13, 20),
        (3, 17, 55),
        (4, 22, 30),
    ]);
    let now = at(5, 23, 0);
    let model = build_model(&events, now);
    assert!(predict_next_session(&model).is_none());

    for start in [0, 24, 48, 72] {
        let bucket = select_bucket(&model, start, &PredictionConfig::default());
        assert!(predictor::confidence(&model, bucket, 2) < 0.5);
    }
}

#[test]
fn stray_session_does_not_hide_the_daily_habit() {
    let mut events = daily_at(20, 7, 30);
    events.push(SessionEvent::completed(at(19, 13, 0)));
    let model = build_model(&events, at(20, 0, 0));

    for (hour, minute) in [(6, 0), (8, 0), (10, 0), (12, 30), (14, 0), (20, 0)] {
        let now = at(20, hour, minute);
        let prediction = predict_next_session_at(&model, now)
            .unwrap_or_else(|| panic!("no prediction at {hour}:{minute:02}"));
        assert_eq!(prediction.bucket, 30, "at {hour}:{minute:02}");
        assert!(prediction.confidence > 0.9);
    }

    let after_breakfast = predict_next_session_at(&model, at(20, 8, 0)).unwrap();
    assert_eq!(
        after_breakfast.predicted_time,
        at(21, 7, 37) + Duration::seconds(30)
    );
}

#[test]
fn forward_candidate_must_clear_the_confidence_gate() {
    let mut events = daily_at(20, 7, 30);
    events.push(SessionEvent::completed(at(19, 13, 0)));
    let model = build_model(&events, at(20, 0, 0));
    let start = 32; // 08:00, the stray 13:00 bucket lies ahead

    assert_eq!(select_bucket(&model, start, &PredictionConfig::default()), 30);

    let accept_anything = PredictionConfig {
        confidence_threshold: 0.0,
        ..Default::default()
    };
    assert_eq!(select_bucket(&model, start, &accept_anything), 52);
}

#[test]
fn zero_session_gate_still_refuses_an_empty_model() {
    let model = build_model(&[], at(0, 0, 0));
    let config = PredictionConfig {
        min_sessions_for_prediction: 0,
        confidence_threshold: 0.0,
        ..Default::default()
    };
    assert!(predict_with(&model, at(0, 6, 0), &config).is_none());
}

// ── Next occurrence ───────────────────────────────────────────────────────

#[test]
fn predicted_time_is_bucket_midpoint() {
    let model = build_model(&daily_at(7, 7, 30), at(7, 6, 0));
    let prediction = predict_next_session(&model).unwrap();
    assert_eq!(
        prediction.predicted_time,
        at(7, 7, 37) + Duration::seconds(30)
    );
}

#[test]
fn passed_time_rolls_over_to_tomorrow() {
    let model = build_model(&daily_at(7, 7, 30), at(7, 8, 0));
    let prediction = predict_next_session(&model).unwrap();
    assert_eq!(
        prediction.predicted_time,
        at(8, 7, 37) + Duration::seconds(30)
    );
}

#[test]
fn late_night_habit_wraps_midnight() {
    let model = build_model(&daily_at(7, 23, 55), at(7, 22, 0));
    let prediction = predict_next_session(&model).unwrap();
    assert_eq!(prediction.bucket, 95);
    assert_eq!(
        prediction.predicted_time,
        at(7, 23, 52) + Duration::seconds(30)
    );

    // Shortly after midnight the next occurrence is the same calendar day.
    let prediction = predict_next_session_at(&model, at(8, 0, 30)).unwrap();
    assert_eq!(
        prediction.predicted_time,
        at(8, 23, 52) + Duration::seconds(30)
    );
}

#[test]
fn prediction_uses_caller_now_not_build_time() {
    let model = build_model(&daily_at(7, 7, 30), at(7, 6, 0));
    let later = at(9, 5, 0);
    let prediction = predict_next_session_at(&model, later).unwrap();
    assert_eq!(
        prediction.predicted_time,
        at(9, 7, 37) + Duration::seconds(30)
    );
    assert!(prediction.predicted_time > later);
}

#[test]
fn forward_scan_prefers_the_upcoming_peak() {
    let mut events = daily_at(10, 7, 30);
    events.extend(daily_at(10, 19, 30));
    let model = build_model(&events, at(10, 0, 0));
    let config = PredictionConfig {
        confidence_threshold: 0.3,
        ..Default::default()
    };

    let morning = predict_with(&model, at(10, 1, 0), &config).unwrap();
    assert_eq!(morning.bucket, 30);

    let evening = predict_with(&model, at(10, 12, 0), &config).unwrap();
    assert_eq!(evening.bucket, 78);
    assert_eq!(evening.predicted_time, at(10, 19, 37) + Duration::seconds(30));
}

// ── Confidence ────────────────────────────────────────────────────────────

#[test]
fn flat_histogram_has_zero_confidence() {
    let model = build_model_with(&evenly_spread(96), at(100, 0, 0), &undecayed());
    for bucket in [0, 17, 50, 95] {
        assert!(predictor::confidence(&model, bucket, 2) < 1e-9);
    }
}

#[test]
fn confidence_grows_with_peak_sharpness() {
    let mut peak = daily_at(6, 7, 30);
    let noise = events_at(&[(1, 1, 0), (2, 11, 0), (3, 15, 0), (4, 20, 0)]);

    peak.extend(noise[..2].iter().copied());
    let sharper = build_model_with(&peak, at(10, 0, 0), &undecayed());
    peak.extend(noise[2..].iter().copied());
    let blurrier = build_model_with(&peak, at(10, 0, 0), &undecayed());

    let sharp = predictor::confidence(&sharper, 30, 2);
    let blurry = predictor::confidence(&blurrier, 30, 2);
    assert!(sharp > blurry, "{sharp} should exceed {blurry}");
    assert!((0.0..=1.0).contains(&sharp));
}

#[test]
fn single_time_history_approaches_full_confidence() {
    let model = build_model(&daily_at(20, 7, 30), at(20, 0, 0));
    let confidence = predictor::confidence(&model, 30, 2);
    assert!(confidence > 0.99 && confidence <= 1.0);
}

#[test]
fn threshold_is_configurable() {
    let model = build_model(&daily_at(5, 7, 30), at(5, 6, 0));
    let strict = PredictionConfig {
        confidence_threshold: 1.0,
        ..Default::default()
    };
    assert!(predict_with(&model, at(5, 6, 0), &strict).is_none());

    let eager = PredictionConfig {
        min_sessions_for_prediction: 2,
        ..Default::default()
    };
    let small = build_model(&daily_at(2, 7, 30), at(2, 6, 0));
    assert!(predict_with(&small, at(2, 6, 0), &eager).is_some());
}

// ── Purity ────────────────────────────────────────────────────────────────

#[test]
fn prediction_does_not_touch_the_model() {
    let model = build_model(&daily_at(7, 7, 30), at(7, 6, 0));
    let before = model.clone();
    let first = predict_next_session(&model);
    let second = predict_next_session(&model);
    assert_eq!(model, before);
    assert_eq!(first, second);
}

#[test]
fn incomplete_sessions_do_not_count_toward_the_gate() {
    let mut events = daily_at(4, 7, 30);
    events.push(SessionEvent {
        occurred_at: at(4, 7, 30),
        completed: false,
    });
    let model = build_model(&events, at(5, 6, 0));
    assert!(predict_next_session(&model).is_none());
}
