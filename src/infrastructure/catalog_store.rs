use std::{sync::Arc, sync::Mutex, time::Duration};

use color_eyre::eyre::{eyre, Result};
use tokio::{runtime::Handle, sync::watch};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        state::search::SearchState,
        store::{SearchDispatcher, SearchIntent, SearchStateSource},
    },
    domain::catalog::Catalog,
    infrastructure::config::SearchConfig,
};

/// In-process search store backed by the configured catalog
///
/// Lookups run on the tokio runtime the store was created on. Each search
/// supersedes the previous one; a superseded or cancelled lookup never
/// publishes its results.
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    settings: SearchConfig,
    state_tx: watch::Sender<SearchState>,
    inflight: Mutex<Option<CancellationToken>>,
    handle: Handle,
}

impl CatalogStore {
    /// Must be called from within a tokio runtime
    pub fn new(catalog: Catalog, settings: SearchConfig) -> Result<Self> {
        let handle = Handle::try_current()?;
        let (state_tx, _) = watch::channel(SearchState::default());
        Ok(Self {
            catalog: Arc::new(catalog),
            settings,
            state_tx,
            inflight: Mutex::new(None),
            handle,
        })
    }

    /// Replace the in-flight lookup token, cancelling the previous one
    fn replace_inflight(&self, next: Option<CancellationToken>) -> Result<()> {
        let mut inflight = self
            .inflight
            .lock()
            .map_err(|e| eyre!("search store lock poisoned: {e}"))?;
        if let Some(previous) = std::mem::replace(&mut *inflight, next) {
            previous.cancel();
        }
        Ok(())
    }

    fn start_search(&self, query: String) -> Result<()> {
        let token = CancellationToken::new();
        self.replace_inflight(Some(token.clone()))?;

        // Previous results stay visible while the new lookup runs
        self.state_tx.send_modify(|state| state.searching = true);

        let catalog = Arc::clone(&self.catalog);
        let state_tx = self.state_tx.clone();
        let latency = Duration::from_millis(self.settings.latency_ms);
        let limit = self.settings.max_results;

        self.handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(latency) => {}
            }

            let results = catalog.search(&query, limit);
            log::debug!("search {query:?}: {} result(s)", results.len());

            // Checked under the channel lock so a concurrent cancel always wins
            state_tx.send_if_modified(|state| {
                if token.is_cancelled() {
                    return false;
                }
                *state = SearchState {
                    searching: false,
                    has_results: !results.is_empty(),
                    search_results: results,
                };
                true
            });
        });

        Ok(())
    }

    fn cancel_search(&self) -> Result<()> {
        self.replace_inflight(None)?;
        self.state_tx.send_replace(SearchState::default());
        Ok(())
    }
}

impl SearchDispatcher for CatalogStore {
    fn dispatch(&self, intent: SearchIntent) -> Result<()> {
        match intent {
            SearchIntent::Search { query } => self.start_search(query),
            SearchIntent::CancelSearch => self.cancel_search(),
        }
    }
}

impl SearchStateSource for CatalogStore {
    fn snapshot(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }
}
