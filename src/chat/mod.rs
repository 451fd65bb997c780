// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Trip planning chat
//!
//! Command handlers that tie the backend client to the session history,
//! along with the example queries, input parsing and display helpers the
//! terminal front end uses.

pub mod display;
pub mod examples;
pub mod input_parser;
pub mod planner;

pub use examples::{ExampleQuery, ExampleSelection};
pub use planner::{TripPlanner, EMPTY_QUERY_MESSAGE};
