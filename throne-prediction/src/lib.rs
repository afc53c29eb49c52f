//! # throne-prediction
//!
//! Session prediction engine. Turns a history of timestamped sessions into a
//! predicted next session time, a confidence score, and pattern insights.
//!
//! ## Pipeline
//!
//! | Stage | Output |
//! |-------|--------|
//! | Histogram | 96 decayed 15-minute buckets + weekday weights |
//! | Builder | Immutable `PredictionModel` |
//! | Predictor | `Prediction` or `None` |
//! | Insights | Ordered `Vec<Insight>` |
//!
//! Every stage is a pure function of its inputs. Decay is computed relative
//! to the model's `built_at`, never the wall clock, so results are replayable.

pub mod builder;
pub mod cache;
pub mod engine;
pub mod format;
pub mod histogram;
pub mod insights;
pub mod model;
pub mod predictor;
pub mod reminder;

pub use builder::{build_model, build_model_with};
pub use cache::ModelCache;
pub use engine::PredictionEngine;
pub use insights::{get_insights, get_insights_with, Insight, InsightType};
pub use model::PredictionModel;
pub use predictor::{predict_next_session, predict_next_session_at, Prediction};
pub use reminder::{plan_reminder, ReminderPlan};
