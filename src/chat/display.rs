// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display formatting for the planner
//!
//! Functions return formatted strings rather than writing to stdout, so the
//! layout can be tested.

use chrono::{Local, TimeZone};

use crate::client::ApiStatus;
use crate::error::WayfarerError;
use crate::history::HistoryEntry;

/// Timestamp layout used in history listings
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render history in local time. Empty history renders as an empty string.
pub fn format_history(entries: &[HistoryEntry]) -> String {
    format_history_in(entries, &Local)
}

/// Render history with timestamps shown in `tz`.
///
/// The newest entry gets the highest query number.
pub fn format_history_in<Tz: TimeZone>(entries: &[HistoryEntry], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let number = entries.len() - index;
        let when = entry.timestamp.with_timezone(tz).format(TIMESTAMP_FORMAT);
        out.push_str(&format!("Query {}: {}\n", number, entry.query));
        out.push_str(&format!("  {}\n", when));
        for line in entry.response.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        if index + 1 < entries.len() {
            out.push('\n');
        }
    }
    out
}

/// Render backend API key status, one line per key
pub fn format_status(status: &ApiStatus) -> String {
    let line = |name: &str, configured: bool| {
        format!(
            "  {:<8} {}\n",
            name,
            if configured { "configured" } else { "missing" }
        )
    };

    let mut out = String::new();
    out.push_str(&line("openai", status.openai));
    out.push_str(&line("serper", status.serper));
    out.push_str(&line("weather", status.weather));
    if !status.is_live() {
        out.push_str("  (backend is answering with demo plans)\n");
    }
    out
}

/// Message to show when a submission fails
pub fn format_submit_error(err: &WayfarerError) -> String {
    match err {
        WayfarerError::Api(api) => api.user_message(),
        WayfarerError::InvalidInput(msg) => msg.clone(),
        other => other.to_string(),
    }
}
