// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Travel-planning chat backend client
//!
//! Defines the abstraction over the backend that answers travel queries,
//! plus the HTTP implementation and a mock for tests.

pub mod http;
pub mod mock;

pub use http::HttpChatClient;
pub use mock::MockBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which third-party API keys the backend has configured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    /// LLM provider key; without it the backend answers with demo plans
    #[serde(default)]
    pub openai: bool,
    /// Web search key
    #[serde(default)]
    pub serper: bool,
    /// Weather key
    #[serde(default)]
    pub weather: bool,
}

impl ApiStatus {
    /// Whether the backend can produce live (non-demo) plans
    pub fn is_live(&self) -> bool {
        self.openai
    }
}

/// Backend that turns a travel query into a plan
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a query and return the assistant's reply
    async fn chat(&self, query: &str) -> Result<String>;

    /// Report which API keys the backend has configured
    async fn status(&self) -> Result<ApiStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_deserialize() {
        let status: ApiStatus =
            serde_json::from_str(r#"{"openai": true, "serper": false, "weather": true}"#).unwrap();
        assert!(status.openai);
        assert!(!status.serper);
        assert!(status.weather);
        assert!(status.is_live());
    }

    #[test]
    fn test_api_status_missing_fields_default_false() {
        let status: ApiStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, ApiStatus::default());
        assert!(!status.is_live());
    }
}
