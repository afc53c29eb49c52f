use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::predictor::Prediction;

/// When to remind the user ahead of a predicted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReminderPlan {
    pub remind_at: DateTime<Utc>,
    pub predicted_time: DateTime<Utc>,
    pub lead_minutes: u32,
}

/// Plan a reminder `lead_minutes` before the predicted session.
///
/// Returns `None` when that moment is not after `now`. Delivery is up to the caller.
pub fn plan_reminder(
    prediction: &Prediction,
    now: DateTime<Utc>,
    lead_minutes: u32,
) -> Option<ReminderPlan> {
    let remind_at = prediction.predicted_time - Duration::minutes(i64::from(lead_minutes));
    (remind_at > now).then_some(ReminderPlan {
        remind_at,
        predicted_time: prediction.predicted_time,
        lead_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn prediction_at(h: u32, m: u32) -> Prediction {
        Prediction {
            predicted_time: Utc.with_ymd_and_hms(2026, 4, 7, h, m, 0).unwrap(),
            confidence: 0.9,
            bucket: 30,
        }
    }

    #[test]
    fn reminder_fires_lead_minutes_early() {
        let now = Utc.with_ymd_and_hms(2026, 4, 7, 6, 0, 0).unwrap();
        let plan = plan_reminder(&prediction_at(7, 37), now, 10).unwrap();
        assert_eq!(plan.remind_at, Utc.with_ymd_and_hms(2026, 4, 7, 7, 27, 0).unwrap());
        assert_eq!(plan.lead_minutes, 10);
    }

    #[test]
    fn no_reminder_when_lead_time_already_passed() {
        let now = Utc.with_ymd_and_hms(2026, 4, 7, 7, 30, 0).unwrap();
        assert!(plan_reminder(&prediction_at(7, 37), now, 10).is_none());
    }
}
