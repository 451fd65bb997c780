// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Built-in example trip queries

/// A canned query the user can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleQuery {
    /// Beach holiday in Goa, priced in INR
    Beach,
    /// Thailand trip with USD to INR conversion
    International,
}

/// Result of picking an entry in the example selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleSelection {
    /// Fill the input with this example
    Example(ExampleQuery),
    /// Clear the input so the user can type their own query
    Custom,
}

impl ExampleQuery {
    /// All examples, in display order
    pub const ALL: [ExampleQuery; 2] = [ExampleQuery::Beach, ExampleQuery::International];

    /// Selector name
    pub fn name(self) -> &'static str {
        match self {
            ExampleQuery::Beach => "beach",
            ExampleQuery::International => "international",
        }
    }

    /// Full query text
    pub fn text(self) -> &'static str {
        match self {
            ExampleQuery::Beach => BEACH,
            ExampleQuery::International => INTERNATIONAL,
        }
    }
}

impl ExampleSelection {
    /// Parse a selector value. Unknown names give `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name == "custom" {
            return Some(ExampleSelection::Custom);
        }
        ExampleQuery::ALL
            .into_iter()
            .find(|example| example.name() == name)
            .map(ExampleSelection::Example)
    }

    /// Text the query input should hold after this selection
    pub fn input_text(self) -> &'static str {
        match self {
            ExampleSelection::Example(example) => example.text(),
            ExampleSelection::Custom => "",
        }
    }
}

const BEACH: &str = "I want to visit Goa for 5 days in December.
My budget is 30,000 INR.
Get current weather for Goa.
Find hotels under 3,000 INR per night.
I want to know about beaches, water sports, and nightlife.
Calculate exact costs including food (500 INR per day).
Show me travel videos about Goa.";

const INTERNATIONAL: &str = "I want to visit Thailand for 4 days.
My budget is 800 USD.
Convert all costs to Indian Rupees.
Get current weather for Bangkok.
Find budget hotels under 30 USD per night.
Include street food and restaurant costs.
Show temple entry fees and transportation costs.
Calculate total trip cost in both USD and INR.";
