// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Wayfarer
//!
//! Handles loading and saving settings from ~/.wayfarer/settings.json

use serde::{Deserialize, Serialize};
use std::time::Duration;

mod io;

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "WAYFARER_BASE_URL";

/// Environment variable overriding the session id
pub const SESSION_ENV: &str = "WAYFARER_SESSION";

/// Main settings structure, stored in ~/.wayfarer/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Travel agent backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the travel agent web service lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the service, without the `/api/...` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Plans can take a while to generate.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session scoping for chat history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session id; history is shared by invocations using the same id
    #[serde(default = "default_session_id")]
    pub id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id: default_session_id(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_session_id() -> String {
    "default".to_string()
}

impl Settings {
    /// Backend base URL, checking the env var first.
    pub fn base_url(&self) -> String {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.backend.base_url.clone())
    }

    /// Session id, checking the env var first.
    pub fn session_id(&self) -> String {
        std::env::var(SESSION_ENV)
            .ok()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.session.id.clone())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs.max(1))
    }
}
