// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP chat backend
//!
//! Talks to the travel agent web service: `POST /api/chat` with
//! `{"query": ...}` and `GET /api/status`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ApiStatus, ChatBackend};
use crate::error::{ApiError, Result};

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ChatReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Chat backend reached over HTTP
pub struct HttpChatClient {
    client: Client,
    base_url: String,
}

impl HttpChatClient {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn chat(&self, query: &str) -> Result<String> {
        let url = self.endpoint("/api/chat");
        tracing::debug!(url = %url, query_len = query.len(), "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { query })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            let reply: ChatReply = serde_json::from_str(&body)
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
            return reply.response.ok_or_else(|| {
                ApiError::InvalidResponse("missing 'response' field".to_string()).into()
            });
        }

        let message = serde_json::from_str::<ChatReply>(&body)
            .ok()
            .and_then(|reply| reply.error)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        tracing::debug!(status = status.as_u16(), %message, "Chat request rejected");
        Err(ApiError::ServerError {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn status(&self) -> Result<ApiStatus> {
        let url = self.endpoint("/api/status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message: DEFAULT_ERROR_MESSAGE.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(transport_error)?;
        let api_status =
            serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Ok(api_status)
    }
}
