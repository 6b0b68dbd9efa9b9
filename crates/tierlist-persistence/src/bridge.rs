//! Connects a board session to its durable record and share fragment.
//!
//! Startup restores the board from a share fragment first, then from the
//! durable record, then falls back to an empty board. After each committed
//! change the durable record is rewritten; write failures are logged and
//! never undo the in-memory change.

use serde::Serialize;
use tierlist_core::{TierlistError, TierlistResult};
use tierlist_domain::{AppState, ChangeKind, IdSource};

use crate::migration::migrate;
use crate::serialization::{decode_state, encode};
use crate::traits::{KeyValueStore, FRAGMENT_KEY, STATE_KEY};

/// Where the startup board came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSource {
    SharedLink,
    Storage,
    Default,
}

pub struct PersistenceBridge<S: KeyValueStore> {
    store: S,
    share_base_url: String,
    auto_sync: bool,
}

/// The fragment of a share link: everything after the first `#`, or the
/// whole input when it has none.
pub fn fragment_from_url(url: &str) -> &str {
    let fragment = match url.split_once('#') {
        Some((_, fragment)) => fragment,
        None => url,
    };
    fragment.trim()
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S, share_base_url: impl Into<String>, auto_sync: bool) -> Self {
        Self {
            store,
            share_base_url: share_base_url.into(),
            auto_sync,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn auto_sync(&self) -> bool {
        self.auto_sync
    }

    /// Restores the startup board.
    ///
    /// `link` is an explicit share link or fragment; when absent the stored
    /// fragment of the last share is tried. Unreadable candidates are skipped.
    pub async fn load_initial(
        &self,
        link: Option<&str>,
        ids: &mut dyn IdSource,
    ) -> (AppState, StateSource) {
        let fragment = match link {
            Some(link) => Some(fragment_from_url(link).to_string()),
            None => self.read(FRAGMENT_KEY).await,
        };
        if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            match decode_state(&fragment) {
                Some(state) => return (state, StateSource::SharedLink),
                None => tracing::warn!("Ignoring unreadable share fragment"),
            }
        }

        if let Some(raw) = self.read(STATE_KEY).await {
            match serde_json::from_str(&raw).ok().and_then(|value| migrate(&value)) {
                Some(state) => return (state, StateSource::Storage),
                None => tracing::warn!("Ignoring unreadable stored board"),
            }
        }

        (AppState::from_names::<&str>(&[], ids), StateSource::Default)
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    /// Persists the board when `change` was committed.
    pub async fn after_change(&self, change: ChangeKind, state: &AppState) {
        if change.is_committed() {
            self.persist(state).await;
        }
    }

    /// Rewrites the durable record. Under auto-sync the fragment is
    /// refreshed too; otherwise a stored fragment no longer matches the board
    /// and is dropped. Failures are logged and swallowed.
    pub async fn persist(&self, state: &AppState) {
        if let Err(e) = self.write_state(state).await {
            tracing::warn!("Failed to save board: {}", e);
        }
        let fragment = if self.auto_sync {
            self.write_fragment(state).await.map(drop)
        } else {
            self.clear_fragment().await
        };
        if let Err(e) = fragment {
            tracing::warn!("Failed to sync share fragment: {}", e);
        }
    }

    async fn write_state(&self, state: &AppState) -> TierlistResult<()> {
        let json = serde_json::to_string(state)
            .map_err(|e| TierlistError::Serialization(e.to_string()))?;
        self.store.set(STATE_KEY, &json).await
    }

    /// Stores the encoded board as the current share fragment.
    pub async fn write_fragment(&self, state: &AppState) -> TierlistResult<String> {
        let encoded = encode(state);
        if encoded.is_empty() {
            return Err(TierlistError::Serialization(
                "board could not be encoded".to_string(),
            ));
        }
        self.store.set(FRAGMENT_KEY, &encoded).await?;
        Ok(encoded)
    }

    pub async fn clear_fragment(&self) -> TierlistResult<()> {
        self.store.remove(FRAGMENT_KEY).await
    }

    /// `{share_base_url}#{encoded}`, or `None` when the board cannot be encoded.
    pub fn share_url(&self, state: &AppState) -> Option<String> {
        let encoded = encode(state);
        if encoded.is_empty() {
            return None;
        }
        Some(format!("{}#{}", self.share_base_url, encoded))
    }
}
