//! Shared test helpers for `suggest-core` integration tests.
//!
//! `ScriptedFetcher` replays queued responses per identifier, counts calls,
//! and can hold every fetch until the test releases it.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use suggest_core::Fetcher;
use suggest_domain::{Result, SuggestError};
use tokio::sync::{Notify, Semaphore};

pub const CITIES_JSON: &str = r#"["Bangui", "Banjul", "Abidjan", "Accra", "Addis_Ababa",
    "Algiers", "Asmara", "Bamako"]"#;

#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, VecDeque<Result<String>>>>,
    calls: AtomicUsize,
    started: Notify,
    gate: Option<Semaphore>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches block until [`release`](Self::release) grants a permit.
    pub fn gated() -> Self {
        Self { gate: Some(Semaphore::new(0)), ..Self::default() }
    }

    pub fn respond(self, identifier: &str, payload: &str) -> Self {
        self.push(identifier, Ok(payload.to_string()));
        self
    }

    pub fn fail(self, identifier: &str, message: &str) -> Self {
        self.push(identifier, Err(SuggestError::fetch(identifier, message)));
        self
    }

    fn push(&self, identifier: &str, response: Result<String>) {
        self.responses.lock().entry(identifier.to_string()).or_default().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Resolves once a fetch has started.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, identifier: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        self.responses
            .lock()
            .get_mut(identifier)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(SuggestError::fetch(identifier, "no scripted response")))
    }
}
