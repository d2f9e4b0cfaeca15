use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use super::gold_price_constants::{DEFAULT_CACHE_TTL, FALLBACK_GOLD_PRICE_PER_GRAM};
use super::gold_price_model::RateSnapshot;
use super::gold_price_traits::GoldPriceServiceTrait;
use super::providers::gold_price_provider::GoldPriceProvider;

/// Caches the upstream gold rate behind a TTL window.
///
/// `price_per_gram` is total: a fresh snapshot is served directly, an expired
/// one triggers a single upstream fetch, and any fetch failure falls back to
/// the last known rate, then to a fixed constant. Callers never observe an
/// unavailable rate.
pub struct GoldPriceService {
    provider: Arc<dyn GoldPriceProvider>,
    snapshot: RwLock<Option<RateSnapshot>>,
    cache_ttl: Duration,
    fallback_price: f64,
}

impl GoldPriceService {
    pub fn new(provider: Arc<dyn GoldPriceProvider>) -> Self {
        Self {
            provider,
            snapshot: RwLock::new(None),
            cache_ttl: DEFAULT_CACHE_TTL,
            fallback_price: FALLBACK_GOLD_PRICE_PER_GRAM,
        }
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_fallback_price(mut self, fallback_price: f64) -> Self {
        self.fallback_price = fallback_price;
        self
    }

    fn read_snapshot(&self) -> RwLockReadGuard<'_, Option<RateSnapshot>> {
        self.snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_snapshot(&self) -> RwLockWriteGuard<'_, Option<RateSnapshot>> {
        self.snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached price if the snapshot is still within its TTL.
    fn fresh_price(&self, now: DateTime<Utc>) -> Option<f64> {
        self.read_snapshot()
            .as_ref()
            .filter(|snapshot| snapshot.is_fresh(self.cache_ttl, now))
            .map(|snapshot| snapshot.price_per_gram)
    }

    /// Last successfully fetched price, fresh or not.
    fn last_known_price(&self) -> Option<f64> {
        self.read_snapshot()
            .as_ref()
            .map(|snapshot| snapshot.price_per_gram)
    }

    /// Replaces the snapshot unless a newer one was stored by a concurrent
    /// refresh in the meantime.
    fn store_snapshot(&self, price_per_gram: f64, captured_at: DateTime<Utc>) {
        let mut guard = self.write_snapshot();
        match guard.as_ref() {
            Some(existing) if existing.captured_at > captured_at => {}
            _ => *guard = Some(RateSnapshot::new(price_per_gram, captured_at)),
        }
    }
}

#[async_trait]
impl GoldPriceServiceTrait for GoldPriceService {
    async fn price_per_gram(&self) -> f64 {
        if let Some(price) = self.fresh_price(Utc::now()) {
            debug!("Returning cached gold price: {} per gram", price);
            return price;
        }

        // The lock is never held across this await.
        match self.provider.fetch_price_per_gram().await {
            Ok(price) => {
                self.store_snapshot(price, Utc::now());
                info!("Gold price updated: {} per gram", price);
                price
            }
            Err(e) => {
                warn!("Error fetching gold price: {}", e);
                match self.last_known_price() {
                    Some(price) => {
                        debug!("Using last known gold price: {} per gram", price);
                        price
                    }
                    None => {
                        warn!(
                            "No cached gold price available, using fallback: {} per gram",
                            self.fallback_price
                        );
                        self.fallback_price
                    }
                }
            }
        }
    }
}
