//! circles-core: circle-by-circle traversal of a friendship graph.
//!
//! People name their friends; some are flagged as best friends. Starting
//! from the best friends, everybody reachable is grouped into successive
//! circles (BFS layers), each circle ordered by name, and emitted one person
//! at a time through a filtered, optionally depth-bounded iterator.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//!
//! let index = PersonIndex::build(load_people(Path::new("people.json"))?);
//! let mut women = GraphIterator::new(&index, Filter::Female);
//! let mut men = BoundedGraphIterator::new(&index, Filter::Male, 1);
//!
//! for invitation in pair_up(&mut men, &mut women) {
//!     println!("{:?}", invitation.names());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`person`]: Person records and gender
//! - [`index`]: Name-keyed lookup and best-friend roots
//! - [`circle`]: Circle expansion and ordering
//! - [`filter`]: Predicates selecting emitted people
//! - [`traversal`]: Lazy unbounded and depth-bounded iterators
//! - [`invite`]: Lockstep pairing of two traversals
//! - [`graph`]: Whole-graph reachability and JSON export
//! - [`builder`]: Fluent API producing a [`TraversalReport`]
//! - [`error`]: Typed error handling

pub mod builder;
pub mod circle;
pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod index;
pub mod invite;
pub mod load;
pub mod logging;
pub mod person;
pub mod prelude;
pub mod report;
pub mod traversal;
pub mod visualize;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{CirclesError, CirclesResult, IoResultExt};

// Data model and index
pub use index::PersonIndex;
pub use person::{Gender, Person};

// Circles
pub use circle::{expand_circle, order_circle, root_circle, Circle, VisitedSet};

// Filters
pub use filter::{Field, Filter};

// Traversals
pub use traversal::{BoundedGraphIterator, CircleTraversal, GraphIterator};

// Pairing
pub use invite::{pair_up, Invitation, InvitationEntry};

// Builder API
pub use builder::{Circles, TraversalReport};

// Graph analysis
pub use graph::{
    build_graph, circle_depths, depths_from_roots, find_unreached, graph_to_json,
    reachable_from_roots,
};

// Loading and configuration
pub use config::{load_config, CirclesConfig, OutputConfig, CONFIG_FILE};
pub use load::{load_people, parse_people};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Reporting
pub use report::{
    print_invitations_json, print_invitations_plain, print_json, print_plain, print_unreached,
};

// Visualization
pub use visualize::generate_dot;
