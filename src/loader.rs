//! Background destination loading with stale-response cancellation.
//!
//! Rapid language switching used to let a slow older response land after a
//! newer one and overwrite it. The loader prevents that: every fetch runs
//! as a task whose abort handle is registered per slug, and starting a new
//! fetch for the same slug aborts the previous one before it can deliver.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::api::ContentApi;
use crate::language::Language;
use crate::localized::LocalizedDestination;

/// Outcome of a background fetch, delivered in request order per slug.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded {
        slug: String,
        destination: Box<LocalizedDestination>,
    },
    Failed {
        slug: String,
        message: String,
    },
}

pub struct DestinationLoader {
    api: Arc<dyn ContentApi>,
    in_flight: Arc<DashMap<String, AbortHandle>>,
    events: mpsc::UnboundedSender<LoadEvent>,
}

impl DestinationLoader {
    pub fn new(api: Arc<dyn ContentApi>) -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                api,
                in_flight: Arc::new(DashMap::new()),
                events,
            },
            receiver,
        )
    }

    /// Start loading `slug` in `language`, aborting any earlier fetch for
    /// the same slug that is still in flight.
    pub fn request(&self, slug: &str, language: Language) {
        let slug = slug.to_string();
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let task_slug = slug.clone();
        let task = tokio::spawn(async move {
            let event = match api.fetch_destination(&task_slug, language).await {
                Ok(destination) => LoadEvent::Loaded {
                    slug: task_slug.clone(),
                    destination: Box::new(destination.localize(language)),
                },
                Err(e) => {
                    warn!("Loading {} failed: {}", task_slug, e);
                    LoadEvent::Failed {
                        slug: task_slug,
                        message: e.to_string(),
                    }
                }
            };
            let _ = events.send(event);
        });
        if let Some(previous) = self.in_flight.insert(slug.clone(), task.abort_handle()) {
            if !previous.is_finished() {
                debug!("Aborting stale fetch for {}", slug);
                previous.abort();
            }
        }
    }

    /// Abort the pending fetch for one slug, if any.
    pub fn cancel(&self, slug: &str) {
        if let Some((_, handle)) = self.in_flight.remove(slug) {
            handle.abort();
        }
    }

    /// Abort everything in flight. Called on teardown.
    pub fn cancel_all(&self) {
        for entry in self.in_flight.iter() {
            entry.value().abort();
        }
        self.in_flight.clear();
    }
}

impl Drop for DestinationLoader {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
