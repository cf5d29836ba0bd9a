//! Person records as they appear in people files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a person, serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named person with an ordered friend list.
///
/// Friend names may reference people that do not exist, or repeat; both are
/// tolerated during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique key of the person
    pub name: String,

    /// Friend names in declaration order
    #[serde(default)]
    pub friends: Vec<String>,

    pub gender: Gender,

    /// Best friends are the roots of every traversal
    #[serde(default)]
    pub best: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            friends: Vec::new(),
            gender,
            best: false,
        }
    }

    /// Replace the friend list.
    pub fn with_friends(mut self, friends: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this person as a best friend.
    pub fn best(mut self) -> Self {
        self.best = true;
        self
    }
}
