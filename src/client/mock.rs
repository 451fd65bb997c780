// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock chat backend for testing
//!
//! Returns queued replies in order and records every query it receives,
//! so handlers can be tested without a running web service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ApiStatus, ChatBackend};
use crate::error::{ApiError, Result};

/// A pre-configured reply for the mock backend
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Successful response text
    Response(String),
    /// Backend rejected the request
    ServerError { status: u16, message: String },
    /// Backend unreachable
    NetworkDown,
}

/// A mock chat backend for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    queries: Arc<Mutex<Vec<String>>>,
    status: ApiStatus,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock backend lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl MockBackend {
    /// Create a mock that has nothing queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        lock(&self.replies).push_back(MockReply::Response(text.into()));
        self
    }

    /// Queue an error response
    pub fn with_server_error(self, status: u16, message: impl Into<String>) -> Self {
        lock(&self.replies).push_back(MockReply::ServerError {
            status,
            message: message.into(),
        });
        self
    }

    /// Queue a network failure
    pub fn with_network_failure(self) -> Self {
        lock(&self.replies).push_back(MockReply::NetworkDown);
        self
    }

    /// Set the status reported by [`ChatBackend::status`]
    pub fn with_status(mut self, status: ApiStatus) -> Self {
        self.status = status;
        self
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }

    /// Number of chat calls made
    pub fn call_count(&self) -> usize {
        lock(&self.queries).len()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, query: &str) -> Result<String> {
        lock(&self.queries).push(query.to_string());

        let reply = lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| MockReply::Response("Mock travel plan".to_string()));

        match reply {
            MockReply::Response(text) => Ok(text),
            MockReply::ServerError { status, message } => {
                Err(ApiError::ServerError { status, message }.into())
            }
            MockReply::NetworkDown => {
                Err(ApiError::Network("connection refused".to_string()).into())
            }
        }
    }

    async fn status(&self) -> Result<ApiStatus> {
        Ok(self.status)
    }
}
