//! Debounced Suggester
//!
//! Owns the publication snapshot and the [`SuggestionQuery`], and recomputes
//! candidates 300 ms after the last change to either of them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::domain::{suggest, Searchable, SuggestionKey, SuggestionQuery, DEFAULT_SUGGESTION_CAP};

/// Debounce parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggesterConfig {
    /// Quiet period after the last keystroke
    pub debounce: Duration,
    /// Maximum number of candidates
    pub max_suggestions: usize,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            max_suggestions: DEFAULT_SUGGESTION_CAP,
        }
    }
}

struct State<T> {
    items: Vec<T>,
    query: SuggestionQuery,
    /// Bumped on every change; a timer only applies its result if it still
    /// carries the latest generation.
    generation: u64,
}

struct Shared<T> {
    config: SuggesterConfig,
    state: Mutex<State<T>>,
    publisher: watch::Sender<SuggestionQuery>,
    recomputations: AtomicU64,
}

impl<T: Searchable> Shared<T> {
    fn recompute(&self, generation: u64) {
        let mut state = self.state.lock();
        if state.generation != generation {
            trace!(generation, current = state.generation, "Stale suggestion timer ignored");
            return;
        }

        let candidates = suggest(&state.items, state.query.term(), self.config.max_suggestions);
        debug!(
            term = %state.query.term(),
            candidates = candidates.len(),
            "[bps-02] Suggestions recomputed"
        );
        state.query.apply_candidates(candidates);
        self.recomputations.fetch_add(1, Ordering::SeqCst);
        self.publisher.send_replace(state.query.clone());
    }
}

/// Trailing-edge debounced autocomplete.
///
/// At most one computation is pending. Each [`set_term`](Self::set_term) or
/// [`set_collection`](Self::set_collection) aborts it and starts a new quiet
/// period. Outside a Tokio runtime the computation runs immediately.
pub struct DebouncedSuggester<T> {
    shared: Arc<Shared<T>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T> DebouncedSuggester<T>
where
    T: Searchable + Send + 'static,
{
    pub fn new(config: SuggesterConfig) -> Self {
        let (publisher, _) = watch::channel(SuggestionQuery::new());
        Self {
            shared: Arc::new(Shared {
                config,
                state: Mutex::new(State {
                    items: Vec::new(),
                    query: SuggestionQuery::new(),
                    generation: 0,
                }),
                publisher,
                recomputations: AtomicU64::new(0),
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> SuggesterConfig {
        self.shared.config
    }

    /// Keystroke in the search box.
    pub fn set_term(&self, term: impl Into<String>) {
        let generation = {
            let mut state = self.shared.state.lock();
            state.query.set_term(term);
            state.generation += 1;
            self.shared.publisher.send_replace(state.query.clone());
            state.generation
        };
        self.schedule(generation);
    }

    /// Replace the searched collection (already in display order).
    pub fn set_collection(&self, items: Vec<T>) {
        let generation = {
            let mut state = self.shared.state.lock();
            state.items = items;
            state.generation += 1;
            state.generation
        };
        self.schedule(generation);
    }

    /// Route a navigation key to the dropdown. Returns whether it was consumed.
    ///
    /// Committing a candidate replaces the term without scheduling a
    /// recomputation, so the dropdown stays closed.
    pub fn handle_key(&self, key: SuggestionKey) -> bool {
        let mut state = self.shared.state.lock();
        let consumed = state.query.handle_key(key);
        if consumed {
            if key == SuggestionKey::Enter && !state.query.is_open() {
                state.generation += 1;
                self.cancel_pending();
            }
            self.shared.publisher.send_replace(state.query.clone());
        }
        consumed
    }

    /// Empty the term and close the dropdown immediately.
    pub fn clear(&self) {
        let mut state = self.shared.state.lock();
        state.query.clear();
        state.generation += 1;
        self.cancel_pending();
        self.shared.publisher.send_replace(state.query.clone());
    }

    pub fn snapshot(&self) -> SuggestionQuery {
        self.shared.state.lock().query.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SuggestionQuery> {
        self.shared.publisher.subscribe()
    }

    /// Number of computations that actually ran.
    pub fn recomputations(&self) -> u64 {
        self.shared.recomputations.load(Ordering::SeqCst)
    }

    /// Whether a computation is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    fn schedule(&self, generation: u64) {
        self.cancel_pending();

        let Ok(runtime) = Handle::try_current() else {
            self.shared.recompute(generation);
            return;
        };

        let shared = Arc::clone(&self.shared);
        let delay = self.shared.config.debounce;
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.recompute(generation);
        });
        *self.pending.lock() = Some(handle);
    }
}

impl<T> Drop for DebouncedSuggester<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
