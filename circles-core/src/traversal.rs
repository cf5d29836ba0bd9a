//! Lazy circle-by-circle traversals.
//!
//! [`GraphIterator`] emits every person reachable from the best friends,
//! circle by circle, names ascending inside a circle, keeping only those
//! accepted by its [`Filter`]. [`BoundedGraphIterator`] stops after a
//! configured circle depth.
//!
//! Both keep one qualifying person buffered ahead of the caller, so
//! `is_done()` is answered without materializing circles that would only
//! turn out to be empty. Traversal ends as soon as the next circle is empty;
//! people in components without a best friend are never visited.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::circle::{expand_circle, order_circle, root_circle, Circle, VisitedSet};
use crate::filter::Filter;
use crate::index::PersonIndex;
use crate::person::Person;

/// Shared interface of pull-based circle traversals.
///
/// `advance()` after `is_done()` returns `None` on every call.
pub trait CircleTraversal<'a> {
    /// True once no further qualifying person exists.
    fn is_done(&self) -> bool;

    /// Returns the next qualifying person, or `None` when done.
    fn advance(&mut self) -> Option<&'a Person>;

    /// Depth of the person the next `advance()` returns (roots are 0).
    fn depth(&self) -> Option<usize>;

    /// Collects everything left in the traversal.
    fn drain(&mut self) -> Vec<&'a Person> {
        let mut out = Vec::new();
        while let Some(person) = self.advance() {
            out.push(person);
        }
        out
    }
}

/// Person buffered ahead of the caller, with the depth of its circle.
#[derive(Debug, Clone, Copy)]
struct Pending<'a> {
    person: &'a Person,
    depth: usize,
}

/// Unbounded filtered traversal over a shared [`PersonIndex`].
#[derive(Debug, Clone)]
pub struct GraphIterator<'a> {
    index: &'a PersonIndex,
    filter: Filter,
    visited: VisitedSet<'a>,
    /// Filtered members of the current circle
    current: Circle<'a>,
    cursor: usize,
    /// Next circle, already ordered; empty means the graph is exhausted
    next_circle: Circle<'a>,
    depth: usize,
    pending: Option<Pending<'a>>,
}

impl<'a> GraphIterator<'a> {
    pub fn new(index: &'a PersonIndex, filter: Filter) -> Self {
        let mut visited = VisitedSet::new();
        let roots = root_circle(index, &mut visited);
        let next_circle = order_circle(expand_circle(index, &roots, &mut visited));
        let current = select(&roots, &filter);

        debug!(
            depth = 0,
            size = roots.len(),
            selected = current.len(),
            filter = %filter,
            "root circle"
        );

        let mut iter = Self {
            index,
            filter,
            visited,
            current,
            cursor: 0,
            next_circle,
            depth: 0,
            pending: None,
        };
        iter.pending = iter.pull();
        iter
    }

    /// Filter this traversal applies.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Number of people assigned to a circle so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Finds the next qualifying person, materializing circles as needed.
    fn pull(&mut self) -> Option<Pending<'a>> {
        loop {
            if let Some(&person) = self.current.get(self.cursor) {
                self.cursor += 1;
                return Some(Pending {
                    person,
                    depth: self.depth,
                });
            }

            if self.next_circle.is_empty() {
                debug!(depth = self.depth, visited = self.visited.len(), "traversal exhausted");
                return None;
            }

            self.step_circle();
        }
    }

    /// Promotes the precomputed next circle to current and computes its successor.
    fn step_circle(&mut self) {
        let circle = std::mem::take(&mut self.next_circle);
        self.depth += 1;
        self.next_circle = order_circle(expand_circle(self.index, &circle, &mut self.visited));
        self.current = select(&circle, &self.filter);
        self.cursor = 0;

        debug!(
            depth = self.depth,
            size = circle.len(),
            selected = self.current.len(),
            "circle materialized"
        );
    }
}

fn select<'a>(circle: &[&'a Person], filter: &Filter) -> Circle<'a> {
    circle.iter().copied().filter(|p| filter.matches(p)).collect()
}

impl<'a> CircleTraversal<'a> for GraphIterator<'a> {
    fn is_done(&self) -> bool {
        self.pending.is_none()
    }

    fn advance(&mut self) -> Option<&'a Person> {
        let emitted = self.pending.take()?;
        self.pending = self.pull();
        trace!(name = %emitted.person.name, depth = emitted.depth, "emit");
        Some(emitted.person)
    }

    fn depth(&self) -> Option<usize> {
        self.pending.map(|p| p.depth)
    }
}

impl<'a> Iterator for GraphIterator<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl FusedIterator for GraphIterator<'_> {}

/// Traversal restricted to circles at depth `max_depth` or below.
///
/// `max_depth = 0` emits the root circle only.
#[derive(Debug, Clone)]
pub struct BoundedGraphIterator<'a> {
    inner: GraphIterator<'a>,
    max_depth: usize,
}

impl<'a> BoundedGraphIterator<'a> {
    pub fn new(index: &'a PersonIndex, filter: Filter, max_depth: usize) -> Self {
        Self::wrap(GraphIterator::new(index, filter), max_depth)
    }

    /// Bounds an existing traversal.
    pub fn wrap(inner: GraphIterator<'a>, max_depth: usize) -> Self {
        Self { inner, max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'a> CircleTraversal<'a> for BoundedGraphIterator<'a> {
    fn is_done(&self) -> bool {
        match self.inner.depth() {
            Some(depth) => depth > self.max_depth,
            None => true,
        }
    }

    fn advance(&mut self) -> Option<&'a Person> {
        if self.is_done() {
            return None;
        }
        self.inner.advance()
    }

    fn depth(&self) -> Option<usize> {
        self.inner.depth().filter(|&d| d <= self.max_depth)
    }
}

impl<'a> Iterator for BoundedGraphIterator<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl FusedIterator for BoundedGraphIterator<'_> {}
