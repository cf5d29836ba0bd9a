//! Pairing two traversals in lockstep.
//!
//! Typical use: one traversal filtered on men, one on women, both over the
//! same index, producing an invitation list of couples followed by whoever
//! is left over.

use serde::Serialize;

use crate::person::Person;
use crate::traversal::CircleTraversal;

/// One entry of an invitation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invitation<'a> {
    Pair(&'a Person, &'a Person),
    Single(&'a Person),
}

impl<'a> Invitation<'a> {
    /// Names in this entry, in order.
    pub fn names(&self) -> Vec<&'a str> {
        match self {
            Invitation::Pair(a, b) => vec![a.name.as_str(), b.name.as_str()],
            Invitation::Single(p) => vec![p.name.as_str()],
        }
    }
}

/// Serializable form of an [`Invitation`]: a pair becomes a two-element
/// array, a single a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InvitationEntry {
    Pair([String; 2]),
    Single(String),
}

impl From<&Invitation<'_>> for InvitationEntry {
    fn from(inv: &Invitation<'_>) -> Self {
        match inv {
            Invitation::Pair(a, b) => InvitationEntry::Pair([a.name.clone(), b.name.clone()]),
            Invitation::Single(p) => InvitationEntry::Single(p.name.clone()),
        }
    }
}

/// Pulls one person from each traversal while neither is done, then drains
/// the remainder of `first`, then of `second`.
pub fn pair_up<'a, A, B>(first: &mut A, second: &mut B) -> Vec<Invitation<'a>>
where
    A: CircleTraversal<'a> + ?Sized,
    B: CircleTraversal<'a> + ?Sized,
{
    let mut out = Vec::new();

    while !first.is_done() && !second.is_done() {
        match (first.advance(), second.advance()) {
            (Some(a), Some(b)) => out.push(Invitation::Pair(a, b)),
            (Some(p), None) | (None, Some(p)) => out.push(Invitation::Single(p)),
            (None, None) => break,
        }
    }

    out.extend(first.drain().into_iter().map(Invitation::Single));
    out.extend(second.drain().into_iter().map(Invitation::Single));
    out
}
