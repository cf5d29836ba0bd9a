//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//! ```

// Data model
pub use crate::error::{CirclesError, CirclesResult};
pub use crate::index::PersonIndex;
pub use crate::person::{Gender, Person};

// Filters and traversals
pub use crate::filter::{Field, Filter};
pub use crate::traversal::{BoundedGraphIterator, CircleTraversal, GraphIterator};

// Pairing
pub use crate::invite::{pair_up, Invitation};

// Loading
pub use crate::load::load_people;

// Builder API
pub use crate::builder::{Circles, TraversalReport};
