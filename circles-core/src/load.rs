//! Loading people files.
//!
//! A people file is a JSON array of person objects:
//!
//! ```json
//! [
//!   { "name": "Sam", "friends": ["Mat", "Sharon"], "gender": "male", "best": true },
//!   { "name": "Mat", "friends": ["Sam"], "gender": "male" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CirclesError, CirclesResult, IoResultExt};
use crate::person::Person;

/// Parses people from JSON text. `origin` is only used in error messages.
pub fn parse_people(text: &str, origin: &Path) -> CirclesResult<Vec<Person>> {
    serde_json::from_str(text).map_err(|e| CirclesError::parse(origin, e.to_string()))
}

/// Reads and parses a people file.
pub fn load_people(path: &Path) -> CirclesResult<Vec<Person>> {
    let text = fs::read_to_string(path).with_path(path)?;
    let people = parse_people(&text, path)?;
    info!(path = %path.display(), count = people.len(), "loaded people");
    Ok(people)
}
