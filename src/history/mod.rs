// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat history for Wayfarer sessions
//!
//! Tracks the last few query/response exchanges of a session so they can be
//! shown again after the page or terminal is reopened.

pub mod store;

pub use store::{HistoryEntry, HistoryStore, HISTORY_KEY, MAX_ENTRIES};
