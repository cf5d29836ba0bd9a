//! Builder pattern API for running a traversal end to end:
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//!
//! let report = Circles::from_path("people.json")?
//!     .with_filter(Filter::Female)
//!     .max_depth(Some(1))
//!     .analyze();
//!
//! println!("Invited: {:?}", report.emitted);
//! ```

use std::path::Path;

use serde::Serialize;

use crate::error::CirclesResult;
use crate::filter::Filter;
use crate::graph::{circle_depths, find_unreached};
use crate::index::PersonIndex;
use crate::load::load_people;
use crate::person::Person;
use crate::traversal::{BoundedGraphIterator, CircleTraversal, GraphIterator};

/// Builder for configuring a traversal over an owned index.
#[derive(Debug, Clone)]
pub struct Circles {
    index: PersonIndex,
    filter: Filter,
    max_depth: Option<usize>,
}

impl Circles {
    /// Create a builder over the given people, accepting everybody, unbounded.
    pub fn new(people: impl IntoIterator<Item = Person>) -> Self {
        Self::from_index(PersonIndex::build(people))
    }

    pub fn from_index(index: PersonIndex) -> Self {
        Self {
            index,
            filter: Filter::default(),
            max_depth: None,
        }
    }

    /// Load people from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CirclesResult<Self> {
        Ok(Self::new(load_people(path.as_ref())?))
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Deepest circle to emit; `None` walks the whole reachable graph.
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn index(&self) -> &PersonIndex {
        &self.index
    }

    /// Fresh traversal with the configured filter and bound.
    pub fn traversal(&self) -> Box<dyn CircleTraversal<'_> + '_> {
        let inner = GraphIterator::new(&self.index, self.filter.clone());
        match self.max_depth {
            Some(max) => Box::new(BoundedGraphIterator::wrap(inner, max)),
            None => Box::new(inner),
        }
    }

    /// Run the traversal to completion.
    pub fn analyze(&self) -> TraversalReport {
        let mut traversal = self.traversal();
        let mut emitted = Vec::new();
        let mut circles: Vec<Vec<String>> = Vec::new();

        while let Some(depth) = traversal.depth() {
            let Some(person) = traversal.advance() else {
                break;
            };
            if circles.len() <= depth {
                circles.resize_with(depth + 1, Vec::new);
            }
            circles[depth].push(person.name.clone());
            emitted.push(person.name.clone());
        }

        // Every materialized circle gets an entry, even when nothing in it
        // (or after it) matched the filter.
        let walked = circle_depths(&self.index).into_values().max().map(|d| d + 1);
        let total = match (walked, self.max_depth) {
            (Some(n), Some(max)) => n.min(max + 1),
            (Some(n), None) => n,
            (None, _) => 0,
        };
        if circles.len() < total {
            circles.resize_with(total, Vec::new);
        }

        let mut roots: Vec<String> = self.index.root_names().map(String::from).collect();
        roots.sort();

        TraversalReport {
            filter: self.filter.to_string(),
            max_depth: self.max_depth,
            total_people: self.index.len(),
            roots,
            emitted,
            circles,
            unreached: find_unreached(&self.index).into_iter().map(String::from).collect(),
        }
    }
}

/// Result of running a traversal.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    /// Filter the traversal applied
    pub filter: String,

    /// Depth bound, if any
    pub max_depth: Option<usize>,

    /// Number of distinct people in the index
    pub total_people: usize,

    /// Best friends, ordered by name
    pub roots: Vec<String>,

    /// Emitted names in emission order
    pub emitted: Vec<String>,

    /// Emitted names grouped by circle depth, one entry per circle the
    /// traversal walked (up to the bound). A circle with no matching member
    /// is an empty list, including trailing ones.
    pub circles: Vec<Vec<String>>,

    /// People no traversal can reach
    pub unreached: Vec<String>,
}

impl TraversalReport {
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}
