//! Opt-in, caller-side model cache.
//!
//! Uses `moka::sync::Cache` keyed by a blake3 fingerprint of the completed
//! event set and the decay-relevant config. Entries expire after a TTL
//! (one bucket by default) so decay does not drift far from wall-clock time.
//! The builder itself never consults this cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::sync::Cache;
use throne_core::config::{defaults, PredictionConfig};
use throne_core::SessionEvent;
use throne_observability::events;

use crate::builder::build_model_with;
use crate::model::PredictionModel;

/// Content key of an event set under a given configuration.
pub type Fingerprint = [u8; 32];

/// Model cache with hit/miss tracking.
pub struct ModelCache {
    cache: Cache<Fingerprint, Arc<PredictionModel>>,
    config: PredictionConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ModelCache {
    /// Cache with the default TTL and capacity.
    pub fn new(config: PredictionConfig) -> Self {
        Self::with_ttl(
            config,
            Duration::from_secs(defaults::DEFAULT_MODEL_CACHE_TTL_SECS),
            defaults::DEFAULT_MODEL_CACHE_CAPACITY,
        )
    }

    pub fn with_ttl(config: PredictionConfig, ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached model for this event set, building it with `now`
    /// as `built_at` on a miss.
    pub fn get_or_build(&self, events: &[SessionEvent], now: DateTime<Utc>) -> Arc<PredictionModel> {
        let key = fingerprint(events, &self.config);
        if let Some(model) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            events::model_cache_lookup(true);
            return model;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        events::model_cache_lookup(false);

        let model = Arc::new(build_model_with(events, now, &self.config));
        self.cache.insert(key, Arc::clone(&model));
        model
    }

    /// Drop every cached model.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Total cache hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total cache misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// Order-independent fingerprint of the completed events and the config
/// fields that affect the built model.
pub fn fingerprint(events: &[SessionEvent], config: &PredictionConfig) -> Fingerprint {
    let mut stamps: Vec<i64> = events
        .iter()
        .filter(|e| e.completed)
        .map(|e| e.occurred_at.timestamp_micros())
        .collect();
    stamps.sort_unstable();

    let mut hasher = blake3::Hasher::new();
    hasher.update(&config.decay_lambda.to_le_bytes());
    hasher.update(&config.utc_offset_minutes.to_le_bytes());
    hasher.update(&(stamps.len() as u64).to_le_bytes());
    for stamp in &stamps {
        hasher.update(&stamp.to_le_bytes());
    }
    *hasher.finalize().as_bytes()
}
