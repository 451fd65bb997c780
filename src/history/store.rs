// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Keeps the most recent query/response exchanges, newest first, and mirrors
//! them as a JSON array into session storage after every change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, WayfarerError};
use crate::storage::SessionStorage;

/// Maximum number of exchanges kept in history
pub const MAX_ENTRIES: usize = 10;

/// Session storage key holding the serialized history
pub const HISTORY_KEY: &str = "travelAgentHistory";

/// One recorded query/response exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What the user asked
    pub query: String,
    /// What the assistant answered, as received
    pub response: String,
    /// When the exchange was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self::at(query, response, Utc::now())
    }

    /// Create an entry with an explicit timestamp
    pub fn at(
        query: impl Into<String>,
        response: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            timestamp,
        }
    }
}

/// Bounded, newest-first chat history backed by session storage
pub struct HistoryStore<S: SessionStorage> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: SessionStorage> HistoryStore<S> {
    /// Create an empty store over `storage`. Call [`load`](Self::load) to
    /// pick up history persisted earlier in the session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            entries: Vec::new(),
        }
    }

    /// Replace the in-memory history with what session storage holds.
    ///
    /// Missing, unreadable or malformed state leaves the history empty.
    pub fn load(&mut self) {
        self.entries.clear();

        let saved = match self.storage.get(HISTORY_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(key = HISTORY_KEY, error = %e, "Failed to read chat history");
                return;
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&saved) {
            Ok(mut entries) => {
                entries.truncate(MAX_ENTRIES);
                tracing::debug!(count = entries.len(), "Loaded chat history");
                self.entries = entries;
            }
            Err(e) => {
                let err = HistoryError::MalformedPersistedState {
                    key: HISTORY_KEY.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(error = %err, "Error loading chat history");
            }
        }
    }

    /// Record a completed exchange as the newest entry.
    pub fn record(&mut self, query: impl Into<String>, response: impl Into<String>) {
        self.push(HistoryEntry::new(query, response));
    }

    /// Record an exchange with an explicit timestamp.
    pub fn record_at(
        &mut self,
        query: impl Into<String>,
        response: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        self.push(HistoryEntry::at(query, response, timestamp));
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
        self.persist();
    }

    /// Current history, newest first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and remove the persisted copy.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove(HISTORY_KEY) {
            let err = HistoryError::PersistenceWriteFailure {
                key: HISTORY_KEY.to_string(),
                reason: e.to_string(),
            };
            tracing::warn!(error = %err, "Failed to remove persisted chat history");
        }
    }

    /// The underlying session storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its session storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(WayfarerError::from)
            .and_then(|content| self.storage.set(HISTORY_KEY, &content));

        if let Err(e) = result {
            let err = HistoryError::PersistenceWriteFailure {
                key: HISTORY_KEY.to_string(),
                reason: e.to_string(),
            };
            tracing::warn!(error = %err, "Chat history kept in memory only");
        }
    }
}
