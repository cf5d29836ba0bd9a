//! Name-keyed lookup over the full set of people.
//!
//! The index owns its records. Traversals borrow it read-only, so several
//! iterators with different filters can walk the same graph side by side.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::person::Person;

/// Lookup table from name to person, plus the ordered list of roots.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex {
    by_name: HashMap<String, Person>,
    roots: Vec<String>,
}

impl PersonIndex {
    /// Builds the index from the full person set.
    ///
    /// Duplicate names keep the last record. Roots are the best-flagged
    /// names in input order, deduplicated, and only kept when the record that
    /// survived in the index is itself flagged.
    pub fn build(people: impl IntoIterator<Item = Person>) -> Self {
        let mut by_name: HashMap<String, Person> = HashMap::new();
        let mut best_order: Vec<String> = Vec::new();
        let mut seen_best: HashSet<String> = HashSet::new();

        for person in people {
            if person.best && seen_best.insert(person.name.clone()) {
                best_order.push(person.name.clone());
            }
            if let Some(previous) = by_name.insert(person.name.clone(), person) {
                warn!(name = %previous.name, "duplicate person name, keeping the last record");
            }
        }

        let roots = best_order
            .into_iter()
            .filter(|name| by_name.get(name).is_some_and(|p| p.best))
            .collect();

        Self { by_name, roots }
    }

    /// Looks up a person by name.
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Best friends in input order. Ordering inside the root circle is
    /// applied later by [`crate::circle::order_circle`].
    pub fn roots(&self) -> Vec<&Person> {
        self.roots.iter().filter_map(|name| self.get(name)).collect()
    }

    /// Root names in input order.
    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    /// All people, sorted by name.
    pub fn people(&self) -> Vec<&Person> {
        let mut all: Vec<&Person> = self.by_name.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Resolved friends of `person`, in friend-list order.
    ///
    /// Names that do not resolve are dead edges and are skipped.
    pub fn friends_of<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a Person> + 'a {
        person.friends.iter().filter_map(move |name| self.get(name))
    }
}

impl FromIterator<Person> for PersonIndex {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;

    fn names(people: &[&Person]) -> Vec<String> {
        people.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_build_and_lookup() {
        let index = PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).with_friends(["Mat"]).best(),
            Person::new("Mat", Gender::Male),
        ]);
        assert_eq!(index.len(), 2);
        assert!(index.contains("Mat"));
        assert!(index.get("Nobody").is_none());
    }

    #[test]
    fn test_roots_in_input_order() {
        let index = PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).best(),
            Person::new("Mat", Gender::Male),
            Person::new("Alise", Gender::Female).best(),
        ]);
        assert_eq!(names(&index.roots()), vec!["Sam", "Alise"]);
    }

    #[test]
    fn test_no_roots() {
        let index = PersonIndex::build(vec![Person::new("Mat", Gender::Male)]);
        assert!(index.roots().is_empty());
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let index = PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).best(),
            Person::new("Sam", Gender::Male).with_friends(["Mat"]),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Sam").unwrap().friends, vec!["Mat"]);
        // The surviving record is not flagged, so Sam is no longer a root
        assert!(index.roots().is_empty());
    }

    #[test]
    fn test_duplicate_best_root_listed_once() {
        let index = PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).best(),
            Person::new("Sam", Gender::Male).best(),
        ]);
        assert_eq!(names(&index.roots()), vec!["Sam"]);
    }

    #[test]
    fn test_friends_of_skips_dead_edges() {
        let index = PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).with_friends(["Ghost", "Mat", "Mat"]),
            Person::new("Mat", Gender::Male),
        ]);
        let sam = index.get("Sam").unwrap();
        let friends: Vec<&str> = index.friends_of(sam).map(|p| p.name.as_str()).collect();
        assert_eq!(friends, vec!["Mat", "Mat"]);
    }

    #[test]
    fn test_people_sorted() {
        let index: PersonIndex = vec![
            Person::new("Sam", Gender::Male),
            Person::new("Alise", Gender::Female),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&index.people()), vec!["Alise", "Sam"]);
    }
}
