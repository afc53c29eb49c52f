//! PredictionEngine — validated configuration in front of the pure functions.

use chrono::{DateTime, Utc};
use throne_core::config::{InsightConfig, PredictionConfig};
use throne_core::errors::ThroneResult;
use throne_core::{SessionEvent, ThroneConfig};

use crate::builder;
use crate::insights::{self, Insight};
use crate::model::PredictionModel;
use crate::predictor::{self, Prediction};
use crate::reminder::{self, ReminderPlan};

/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    prediction: PredictionConfig,
    insights: InsightConfig,
}

impl PredictionEngine {
    /// Create an engine, rejecting invalid configuration.
    pub fn new(config: &ThroneConfig) -> ThroneResult<Self> {
        config.validate()?;
        Ok(Self {
            prediction: config.prediction.clone(),
            insights: config.insights.clone(),
        })
    }

    pub fn prediction_config(&self) -> &PredictionConfig {
        &self.prediction
    }

    pub fn insight_config(&self) -> &InsightConfig {
        &self.insights
    }

    /// Build a fresh model with `now` as `built_at`.
    pub fn build_model(&self, events: &[SessionEvent], now: DateTime<Utc>) -> PredictionModel {
        builder::build_model_with(events, now, &self.prediction)
    }

    /// Predict relative to the model's `built_at`.
    pub fn predict_next_session(&self, model: &PredictionModel) -> Option<Prediction> {
        self.predict_next_session_at(model, model.built_at())
    }

    /// Predict the next session after `now`.
    pub fn predict_next_session_at(
        &self,
        model: &PredictionModel,
        now: DateTime<Utc>,
    ) -> Option<Prediction> {
        predictor::predict_with(model, now, &self.prediction)
    }

    pub fn insights(&self, model: &PredictionModel) -> Vec<Insight> {
        insights::get_insights_with(model, &self.insights)
    }

    /// Plan a reminder using the configured lead time.
    pub fn plan_reminder(
        &self,
        prediction: &Prediction,
        now: DateTime<Utc>,
    ) -> Option<ReminderPlan> {
        reminder::plan_reminder(prediction, now, self.prediction.notification_lead_minutes)
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self {
            prediction: PredictionConfig::default(),
            insights: InsightConfig::default(),
        }
    }
}
