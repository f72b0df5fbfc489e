//! Source manager - one matcher per identifier, loaded at most once
//!
//! Each identifier moves through `Unloaded -> Loading -> Ready`. The first
//! request starts a load and records it as a shared future; every request
//! arriving while it runs attaches to that same future, so the fetcher is
//! called and the index is built once per identifier. A failed load removes
//! the entry again so the next request can retry.
//!
//! Inside a Tokio runtime the load is spawned as soon as it is recorded, so
//! it completes even if every caller drops its handle. The load only holds a
//! weak reference to the slot map.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Instant;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use suggest_common::cache::{Cache, CacheConfig};
use suggest_domain::{Dataset, PayloadCacheConfig, Result, SourceDescriptor};
use tracing::{debug, info, warn};

use super::ports::Fetcher;
use crate::matching::Matcher;

/// Raw payloads keyed by source identifier.
pub type PayloadCache = Cache<String, Arc<str>>;

type LoadFuture = Shared<BoxFuture<'static, Result<Arc<Matcher>>>>;

enum SourceSlot {
    Loading(LoadFuture),
    Ready(Arc<Matcher>),
}

/// Observable lifecycle of one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// Never requested, or the last load failed.
    Unloaded,
    /// A load is in flight.
    Loading,
    /// A matcher is cached.
    Ready,
}

/// Outcome of [`SourceManager::acquire`].
#[derive(Debug)]
pub enum Acquired {
    /// The matcher is cached and can be queried right away.
    Ready(Arc<Matcher>),
    /// A load is in flight; await [`PendingLoad::wait`] for the matcher.
    Pending(PendingLoad),
}

impl Acquired {
    /// Resolves to the matcher, waiting on the in-flight load if needed.
    ///
    /// # Errors
    /// Returns the load's fetch or parse failure.
    pub async fn into_matcher(self) -> Result<Arc<Matcher>> {
        match self {
            Self::Ready(matcher) => Ok(matcher),
            Self::Pending(pending) => pending.wait().await,
        }
    }
}

/// Handle on an in-flight load shared by every attached request.
pub struct PendingLoad {
    identifier: String,
    future: LoadFuture,
}

impl PendingLoad {
    /// Identifier being loaded.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Waits for the shared load to finish.
    ///
    /// # Errors
    /// Every attached request receives the same fetch or parse failure.
    pub async fn wait(self) -> Result<Arc<Matcher>> {
        self.future.await
    }
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad").field("identifier", &self.identifier).finish_non_exhaustive()
    }
}

/// Builds the payload cache described by `config`.
pub fn payload_cache(config: &PayloadCacheConfig) -> PayloadCache {
    Cache::new(
        CacheConfig::builder()
            .max_size(config.max_entries)
            .maybe_ttl(config.ttl())
            .track_metrics(true)
            .build(),
    )
}

/// Maps source identifiers to matchers, loading each one at most once.
pub struct SourceManager {
    fetcher: Arc<dyn Fetcher>,
    payloads: PayloadCache,
    slots: Arc<Mutex<HashMap<String, SourceSlot>>>,
}

impl SourceManager {
    /// Create a manager with a default-sized payload cache
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            payloads: payload_cache(&PayloadCacheConfig::default()),
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Use `cache` for raw payloads, e.g. to share it with another manager.
    pub fn with_payload_cache(mut self, cache: PayloadCache) -> Self {
        self.payloads = cache;
        self
    }

    /// Raw payload cache consulted before fetching.
    pub fn payload_cache(&self) -> &PayloadCache {
        &self.payloads
    }

    /// Current state of `identifier`. Never triggers a load.
    pub fn state(&self, identifier: &str) -> SourceState {
        match self.slots.lock().get(identifier) {
            None => SourceState::Unloaded,
            Some(SourceSlot::Loading(_)) => SourceState::Loading,
            Some(SourceSlot::Ready(_)) => SourceState::Ready,
        }
    }

    /// The cached matcher for `identifier`, if it is ready.
    pub fn ready(&self, identifier: &str) -> Option<Arc<Matcher>> {
        match self.slots.lock().get(identifier) {
            Some(SourceSlot::Ready(matcher)) => Some(Arc::clone(matcher)),
            _ => None,
        }
    }

    /// Returns the ready matcher or a handle on its (possibly new) load.
    ///
    /// The descriptor is validated before any state changes. A new load is
    /// recorded immediately and spawned on the current Tokio runtime; without
    /// one it runs once some caller awaits the handle.
    ///
    /// # Errors
    /// Returns `SuggestError::Config` for an invalid descriptor.
    pub fn acquire(&self, descriptor: &SourceDescriptor) -> Result<Acquired> {
        descriptor.validate()?;
        let identifier = &descriptor.identifier;
        let mut slots = self.slots.lock();

        match slots.get(identifier) {
            Some(SourceSlot::Ready(matcher)) => return Ok(Acquired::Ready(Arc::clone(matcher))),
            Some(SourceSlot::Loading(future)) => {
                debug!(identifier = %identifier, "attaching to in-flight load");
                return Ok(Acquired::Pending(PendingLoad {
                    identifier: identifier.clone(),
                    future: future.clone(),
                }));
            }
            None => {}
        }

        info!(identifier = %identifier, cache_enabled = descriptor.cache_enabled, "loading source");
        let future = self.start_load(descriptor.clone());
        slots.insert(identifier.clone(), SourceSlot::Loading(future.clone()));
        drop(slots);

        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            let load = future.clone();
            runtime.spawn(async move {
                // Outcome is recorded in the slot map and logged by the load itself.
                let _ = load.await;
            });
        }
        Ok(Acquired::Pending(PendingLoad { identifier: identifier.clone(), future }))
    }

    /// Resolves the matcher for `descriptor`, loading it if needed.
    ///
    /// # Errors
    /// Returns configuration errors immediately and load failures once the
    /// shared load finishes.
    pub async fn matcher(&self, descriptor: &SourceDescriptor) -> Result<Arc<Matcher>> {
        self.acquire(descriptor)?.into_matcher().await
    }

    fn start_load(&self, descriptor: SourceDescriptor) -> LoadFuture {
        let fetcher = Arc::clone(&self.fetcher);
        let payloads = self.payloads.clone();
        let slots: Weak<_> = Arc::downgrade(&self.slots);

        async move {
            let started = Instant::now();
            let result = load_matcher(fetcher.as_ref(), &payloads, &descriptor).await;
            let identifier = descriptor.identifier;

            if let Some(slots) = slots.upgrade() {
                let mut slots = slots.lock();
                match &result {
                    Ok(matcher) => {
                        slots.insert(identifier.clone(), SourceSlot::Ready(Arc::clone(matcher)));
                    }
                    Err(_) => {
                        slots.remove(&identifier);
                    }
                }
            }

            match &result {
                Ok(matcher) => info!(
                    identifier = %identifier,
                    entries = matcher.dataset().len(),
                    nodes = matcher.index_size(),
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "source ready"
                ),
                Err(err) => warn!(
                    identifier = %identifier,
                    error = %err,
                    kind = err.label(),
                    "source load failed"
                ),
            }

            result
        }
        .boxed()
        .shared()
    }
}

async fn load_matcher(
    fetcher: &dyn Fetcher,
    payloads: &PayloadCache,
    descriptor: &SourceDescriptor,
) -> Result<Arc<Matcher>> {
    let identifier = &descriptor.identifier;

    let cached = if descriptor.cache_enabled { payloads.get(identifier) } else { None };
    let (payload, fetched) = match cached {
        Some(payload) => {
            debug!(identifier = %identifier, "reusing cached payload");
            (payload, false)
        }
        None => (Arc::<str>::from(fetcher.fetch(identifier).await?), true),
    };

    let dataset = Dataset::parse(identifier, &payload)?;

    // Only payloads that parsed are worth reusing.
    if fetched && descriptor.cache_enabled {
        payloads.insert(identifier.clone(), payload);
    }

    let matcher = Matcher::new(dataset).with_default_max_results(descriptor.default_max_results);
    Ok(Arc::new(matcher))
}

impl std::fmt::Debug for SourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceManager")
            .field("sources", &self.slots.lock().len())
            .field("payloads", &self.payloads.len())
            .finish_non_exhaustive()
    }
}
