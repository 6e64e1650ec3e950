// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The built-in catalog of theme parks and routes
//!
//! The dataset is compiled in: 20 parks joined by 20 weighted routes forming
//! a single cycle. It is loaded once at startup as an immutable configuration
//! structure and validated when the graph is built.

use crate::types::{Park, Route};
use serde::{Deserialize, Serialize};

/// Park labels, in menu order. 1-based user selections index into this list.
const PARKS: [&str; 20] = [
    "Magic Kingdom, FL",
    "Disneyland, CA",
    "Legoland, CA",
    "Sesame Place, PA",
    "Story Land, NH",
    "Santa's Village, NH",
    "Universal's Island of Adventure, FL",
    "Dutch Wonderland, PA",
    "Disney's Animal Kingdom, FL",
    "SeaWorld Orlando, FL",
    "Carowinds, NC",
    "Kings Dominion, VA",
    "Silver Dollar City, MO",
    "Dollywood, TN",
    "Nickelodeon Universe, NJ",
    "Six Flags Magic Mountain, CA",
    "Cedar Point, OH",
    "Kennywood, PA",
    "Hersheypark, PA",
    "Busch Gardens Tampa Bay, FL",
];

/// Routes between parks with driving distances in miles.
const ROUTES: [(&str, &str, f64); 20] = [
    ("Magic Kingdom, FL", "Disneyland, CA", 2500.0),
    ("Disneyland, CA", "Legoland, CA", 95.0),
    ("Legoland, CA", "Sesame Place, PA", 2900.0),
    ("Sesame Place, PA", "Story Land, NH", 350.0),
    ("Story Land, NH", "Santa's Village, NH", 50.0),
    ("Santa's Village, NH", "Universal's Island of Adventure, FL", 1400.0),
    ("Universal's Island of Adventure, FL", "Dutch Wonderland, PA", 950.0),
    ("Dutch Wonderland, PA", "Disney's Animal Kingdom, FL", 980.0),
    ("Disney's Animal Kingdom, FL", "SeaWorld Orlando, FL", 16.0),
    ("SeaWorld Orlando, FL", "Carowinds, NC", 550.0),
    ("Carowinds, NC", "Kings Dominion, VA", 350.0),
    ("Kings Dominion, VA", "Silver Dollar City, MO", 920.0),
    ("Silver Dollar City, MO", "Dollywood, TN", 550.0),
    ("Dollywood, TN", "Nickelodeon Universe, NJ", 800.0),
    ("Nickelodeon Universe, NJ", "Six Flags Magic Mountain, CA", 2800.0),
    ("Six Flags Magic Mountain, CA", "Cedar Point, OH", 2300.0),
    ("Cedar Point, OH", "Kennywood, PA", 150.0),
    ("Kennywood, PA", "Hersheypark, PA", 200.0),
    ("Hersheypark, PA", "Busch Gardens Tampa Bay, FL", 1000.0),
    ("Busch Gardens Tampa Bay, FL", "Magic Kingdom, FL", 100.0),
];

/// Immutable park/route configuration, the single source of truth for the graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All parks, in insertion (menu) order
    #[serde(default)]
    pub parks: Vec<Park>,
    /// All routes between parks
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Catalog {
    /// The compiled-in dataset
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            parks: PARKS.iter().copied().map(Park::new).collect(),
            routes: ROUTES
                .iter()
                .map(|&(from, to, miles)| Route::new(from, to, miles))
                .collect(),
        }
    }

    /// Park labels in insertion order
    pub fn park_names(&self) -> impl Iterator<Item = &str> {
        self.parks.iter().map(|p| p.name.as_str())
    }

    /// Number of parks
    #[must_use]
    pub fn park_count(&self) -> usize {
        self.parks.len()
    }
}
