//! Predicates selecting which members of a circle are emitted.
//!
//! `Filter` is a closed set of variants. Text forms (config files, CLI
//! flags) are parsed with [`FromStr`]; an unknown name is rejected with
//! [`CirclesError::InvalidFilterType`] before any traversal starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CirclesError;
use crate::person::{Gender, Person};

/// Person field a [`Filter::Any`] compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[default]
    Name,
    Gender,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Gender => "gender",
        }
    }

    fn read<'p>(&self, person: &'p Person) -> &'p str {
        match self {
            Field::Name => &person.name,
            Field::Gender => person.gender.as_str(),
        }
    }
}

impl FromStr for Field {
    type Err = CirclesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "gender" => Ok(Field::Gender),
            other => Err(CirclesError::invalid_filter(format!("any({})", other))),
        }
    }
}

/// Predicate over a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `person[field] == value`. A missing value stands for the person's own
    /// name, so `Any { field: Name, value: None }` accepts everybody.
    Any { field: Field, value: Option<String> },
    Male,
    Female,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Any {
            field: Field::Name,
            value: None,
        }
    }
}

impl Filter {
    /// Equality filter on an explicit field and value.
    pub fn any(field: Field, value: impl Into<String>) -> Self {
        Filter::Any {
            field,
            value: Some(value.into()),
        }
    }

    /// Filter matching everybody.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Filter::Any { field, value } => {
                let expected = value.as_deref().unwrap_or(&person.name);
                field.read(person) == expected
            }
            Filter::Male => person.gender == Gender::Male,
            Filter::Female => person.gender == Gender::Female,
        }
    }

    /// Parses a filter kind plus the optional `any` arguments.
    ///
    /// `field` and `value` are only meaningful for `any`; passing them with
    /// another kind is an invalid argument.
    pub fn from_parts(
        kind: &str,
        field: Option<&str>,
        value: Option<&str>,
    ) -> Result<Self, CirclesError> {
        let filter: Filter = kind.parse()?;
        match filter {
            Filter::Any { .. } => Ok(Filter::Any {
                field: field.map(str::parse::<Field>).transpose()?.unwrap_or_default(),
                value: value.map(String::from),
            }),
            _ if field.is_some() || value.is_some() => Err(CirclesError::invalid_argument(
                format!("'{}' filter does not take a field or value", filter),
            )),
            _ => Ok(filter),
        }
    }
}

impl FromStr for Filter {
    type Err = CirclesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "all" => Ok(Filter::default()),
            "male" => Ok(Filter::Male),
            "female" => Ok(Filter::Female),
            _ => Err(CirclesError::invalid_filter(s)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Any { field, value: None } => write!(f, "any({})", field.as_str()),
            Filter::Any {
                field,
                value: Some(v),
            } => write!(f, "any({}={})", field.as_str(), v),
            Filter::Male => f.write_str("male"),
            Filter::Female => f.write_str("female"),
        }
    }
}
