//! Circle expansion and ordering.
//!
//! A circle is every person first reached at a given distance from the
//! best friends. Circles are computed level by level, like BFS layers:
//! - Expansion: O(sum of friend-list lengths in the circle)
//! - Ordering: O(n log n) in the circle size

use std::collections::HashSet;

use crate::index::PersonIndex;
use crate::person::Person;

/// People first reached at one traversal depth.
pub type Circle<'a> = Vec<&'a Person>;

/// Names already assigned to a circle. Grows monotonically.
pub type VisitedSet<'a> = HashSet<&'a str>;

/// Computes the circle that follows `circle`.
///
/// Friend lists are scanned in order. Each resolved friend not yet in
/// `visited` is marked and appended once; unresolved names are skipped.
/// An empty result means nothing new is reachable.
pub fn expand_circle<'a>(
    index: &'a PersonIndex,
    circle: &[&'a Person],
    visited: &mut VisitedSet<'a>,
) -> Circle<'a> {
    let mut next = Vec::new();

    for &person in circle {
        for friend in index.friends_of(person) {
            if visited.insert(friend.name.as_str()) {
                next.push(friend);
            }
        }
    }

    next
}

/// Sorts a circle by name, ordinal ascending.
pub fn order_circle(mut circle: Circle<'_>) -> Circle<'_> {
    circle.sort_by(|a, b| a.name.cmp(&b.name));
    circle
}

/// Root circle: all best friends, ordered, and marked visited.
pub fn root_circle<'a>(index: &'a PersonIndex, visited: &mut VisitedSet<'a>) -> Circle<'a> {
    let roots = index
        .roots()
        .into_iter()
        .filter(|&p| visited.insert(p.name.as_str()))
        .collect();
    order_circle(roots)
}
