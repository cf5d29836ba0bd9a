//! Friendship graph construction and reachability analysis.
//!
//! Performance characteristics:
//! - Graph build: O(|V| + |E|) where V = people, E = resolved friend references
//! - Multi-source reachability: O(|V| + |E|) single traversal
//!
//! These answer whole-graph questions (who is reachable, at what depth,
//! who is never invited) without running a filtered traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::index::PersonIndex;

/// Builds the friendship graph. Dead references are dropped.
///
/// Edges are directed as declared: `a -> b` when `b` is on `a`'s list.
pub fn build_graph(index: &PersonIndex) -> DiGraphMap<&str, ()> {
    let mut g = DiGraphMap::new();

    for person in index.people() {
        g.add_node(person.name.as_str());
    }

    for person in index.people() {
        for friend in &person.friends {
            if let Some(target) = index.get(friend) {
                g.add_edge(person.name.as_str(), target.name.as_str(), ());
            }
        }
    }

    g
}

/// Multi-source BFS returning the depth of every reachable name.
///
/// Roots missing from the graph are logged and skipped.
pub fn depths_from_roots<'a>(
    g: &DiGraphMap<&'a str, ()>,
    roots: impl IntoIterator<Item = &'a str>,
) -> HashMap<&'a str, usize> {
    let mut depth = HashMap::new();
    let mut queue = VecDeque::new();

    for root in roots {
        if g.contains_node(root) {
            if !depth.contains_key(root) {
                depth.insert(root, 0);
                queue.push_back(root);
            }
        } else {
            warn!(root = %root, "root not found in graph");
        }
    }

    while let Some(node) = queue.pop_front() {
        let d = depth[node];
        for n in g.neighbors(node) {
            if !depth.contains_key(n) {
                depth.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }

    depth
}

/// Set of all names reachable from any root.
pub fn reachable_from_roots<'a>(
    g: &DiGraphMap<&'a str, ()>,
    roots: impl IntoIterator<Item = &'a str>,
) -> HashSet<&'a str> {
    depths_from_roots(g, roots).into_keys().collect()
}

/// Circle depth of every person reachable from the index's roots.
pub fn circle_depths(index: &PersonIndex) -> HashMap<&str, usize> {
    let g = build_graph(index);
    depths_from_roots(&g, index.root_names())
}

/// People no traversal will ever emit, sorted by name.
pub fn find_unreached(index: &PersonIndex) -> Vec<&str> {
    let depths = circle_depths(index);
    index
        .people()
        .into_iter()
        .map(|p| p.name.as_str())
        .filter(|name| !depths.contains_key(name))
        .collect()
}

/// Export the friendship graph in visualizer-compatible JSON format.
///
/// ```json
/// {
///   "nodes": [{ "id": 0, "name": "Sam", "gender": "male", "best": true, "depth": 0 }],
///   "edges": [{ "from": 0, "to": 1 }]
/// }
/// ```
///
/// Unreached people have `"depth": null`.
pub fn graph_to_json(index: &PersonIndex) -> serde_json::Value {
    let people = index.people();
    let depths = circle_depths(index);
    let name_to_id: HashMap<&str, usize> = people
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.as_str(), i))
        .collect();

    let nodes: Vec<serde_json::Value> = people
        .iter()
        .enumerate()
        .map(|(i, p)| {
            serde_json::json!({
                "id": i,
                "name": p.name,
                "gender": p.gender,
                "best": p.best,
                "depth": depths.get(p.name.as_str()),
            })
        })
        .collect();

    let mut edges: Vec<serde_json::Value> = Vec::new();
    for p in &people {
        let from_id = name_to_id[p.name.as_str()];
        for friend in &p.friends {
            if let Some(&to_id) = name_to_id.get(friend.as_str()) {
                edges.push(serde_json::json!({ "from": from_id, "to": to_id }));
            }
        }
    }

    let unreached = people.len() - depths.len();
    let max_depth = depths.values().copied().max();

    serde_json::json!({
        "nodes": nodes,
        "edges": edges,
        "stats": {
            "total_people": people.len(),
            "total_edges": edges.len(),
            "unreached": unreached,
            "circles": max_depth.map_or(0, |d| d + 1),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Gender, Person};

    fn sample() -> PersonIndex {
        PersonIndex::build(vec![
            Person::new("Sam", Gender::Male).with_friends(["Mat", "Ghost"]).best(),
            Person::new("Mat", Gender::Male).with_friends(["Alise"]),
            Person::new("Alise", Gender::Female).with_friends(["Sam"]),
            Person::new("Island", Gender::Female).with_friends(["Sam"]),
        ])
    }

    #[test]
    fn test_build_graph_drops_dead_edges() {
        let index = sample();
        let g = build_graph(&index);
        assert_eq!(g.node_count(), 4);
        assert!(g.contains_edge("Sam", "Mat"));
        assert!(!g.contains_node("Ghost"));
        // One-directional declaration stays one-directional
        assert!(g.contains_edge("Island", "Sam"));
        assert!(!g.contains_edge("Sam", "Island"));
    }

    #[test]
    fn test_circle_depths() {
        let index = sample();
        let depths = circle_depths(&index);
        assert_eq!(depths.get("Sam"), Some(&0));
        assert_eq!(depths.get("Mat"), Some(&1));
        assert_eq!(depths.get("Alise"), Some(&2));
        assert_eq!(depths.get("Island"), None);
    }

    #[test]
    fn test_find_unreached() {
        let index = sample();
        assert_eq!(find_unreached(&index), vec!["Island"]);
    }

    #[test]
    fn test_reachable_from_roots_missing_root() {
        let index = sample();
        let g = build_graph(&index);
        let reachable = reachable_from_roots(&g, ["Nobody"]);
        assert!(reachable.is_empty());
    }

    #[test]
    fn test_no_roots_everyone_unreached() {
        let index = PersonIndex::build(vec![
            Person::new("A", Gender::Male).with_friends(["B"]),
            Person::new("B", Gender::Female),
        ]);
        assert_eq!(find_unreached(&index), vec!["A", "B"]);
    }

    #[test]
    fn test_graph_to_json() {
        let index = sample();
        let json = graph_to_json(&index);

        let nodes = json["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 4);
        // Nodes are sorted by name
        assert_eq!(nodes[0]["name"], "Alise");
        assert_eq!(nodes[0]["depth"], 2);
        assert!(nodes[1]["depth"].is_null()); // Island

        assert_eq!(json["stats"]["total_edges"].as_u64(), Some(4));
        assert_eq!(json["stats"]["unreached"].as_u64(), Some(1));
        assert_eq!(json["stats"]["circles"].as_u64(), Some(3));
    }
}
