// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Wayfarer
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Wayfarer operations
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Chat backend errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Chat history errors (logged by the store, never returned from it)
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Chat backend error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// The backend answered with an error status
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The backend answered 2xx with a body we could not use
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Message suitable for showing to the person planning the trip
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) | ApiError::Timeout => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ApiError::ServerError { message, .. } => message.clone(),
            ApiError::InvalidResponse(_) => {
                "An error occurred while processing your request.".to_string()
            }
        }
    }
}

/// Failures inside the history store. Both are recovered locally.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Persisted history exists but is not a valid entry list
    #[error("Malformed persisted history under '{key}': {reason}")]
    MalformedPersistedState { key: String, reason: String },

    /// Writing or removing persisted history failed
    #[error("Failed to persist history under '{key}': {reason}")]
    PersistenceWriteFailure { key: String, reason: String },
}

/// Result type alias for Wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
