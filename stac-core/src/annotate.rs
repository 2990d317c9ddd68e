//! Inline annotation markers for human-readable text dumps
//!
//! The renderer walks the text once and splices an opening marker before
//! the first character of each visible unit and a closing marker after its
//! last character. Which units are visible, and what their markers look
//! like, is decided by an [`Inserts`] table keyed on [`Unit::rough_type`].

use crate::unit::{sorted_first_widest, Unit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opening and closing marker for one rough unit type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl Insert {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Marker table from rough unit type to its [`Insert`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inserts(BTreeMap<String, Insert>);

impl Inserts {
    /// Table with no visible unit types
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, rough_type: &str) -> Option<&Insert> {
        self.0.get(rough_type)
    }

    /// Add or replace the markers for a rough type
    pub fn insert(&mut self, rough_type: impl Into<String>, insert: Insert) {
        self.0.insert(rough_type.into(), insert);
    }

    /// Merge `other` over this table, replacing markers for shared types
    pub fn extend(&mut self, other: Inserts) {
        self.0.extend(other.0);
    }
}

impl Default for Inserts {
    /// Turns and dialogues start on a new line, EDUs are wrapped in braces
    fn default() -> Self {
        let mut inserts = Self::empty();
        inserts.insert("Turn", Insert::new("\n", ""));
        inserts.insert("Dialogue", Insert::new("\n\n", ""));
        inserts.insert("EDU", Insert::new("{", "}"));
        inserts
    }
}

/// Decorate `text` with markers for every visible unit in `units`
///
/// Unit spans are character offsets into `text`. Units whose span runs past
/// the end of the text are not drawn.
pub fn annotate(text: &str, units: &[Unit], inserts: &Inserts) -> String {
    let len = text.chars().count();

    let visible: Vec<(&Unit, &Insert)> = sorted_first_widest(units)
        .into_iter()
        .filter(|u| u.span.start <= u.span.end && u.span.end <= len)
        .filter_map(|u| inserts.get(u.rough_type()).map(|ins| (u, ins)))
        .collect();

    let mut opens: Vec<Vec<&str>> = vec![Vec::new(); len + 1];
    let mut closes: Vec<Vec<&str>> = vec![Vec::new(); len + 1];
    let mut extra = 0;

    for (unit, ins) in &visible {
        opens[unit.span.start].push(&ins.open);
        // An empty unit closes where it opens; keep its markers together.
        if unit.span.is_empty() {
            opens[unit.span.start].push(&ins.close);
        }
        extra += ins.open.len() + ins.close.len();
    }
    for (unit, ins) in visible.iter().rev() {
        if !unit.span.is_empty() {
            closes[unit.span.end].push(&ins.close);
        }
    }

    let mut out = String::with_capacity(text.len() + extra);
    let mut chars = text.chars();
    for pos in 0..=len {
        for marker in &closes[pos] {
            out.push_str(marker);
        }
        for marker in &opens[pos] {
            out.push_str(marker);
        }
        if let Some(c) = chars.next() {
            out.push(c);
        }
    }
    out
}
