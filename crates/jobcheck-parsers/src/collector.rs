use std::collections::BTreeMap;

use crate::handler::HandlerRef;

// ---------------------------------------------------------------------------
// Collector trait
// ---------------------------------------------------------------------------

/// A pure, syntax-only pass over a located handler.
///
/// Both collectors run independently over the same handler; neither depends
/// on the other's output.
pub trait Collector {
    type Output;

    fn collect(&self, handler: &HandlerRef<'_>, source: &[u8]) -> Self::Output;
}

// ---------------------------------------------------------------------------
// Types produced by collectors
// ---------------------------------------------------------------------------

/// A set of field names, each remembered with the first line it appears on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: BTreeMap<String, u32>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; repeated names collapse and keep the earliest line.
    pub fn insert(&mut self, name: impl Into<String>, line: u32) {
        self.fields
            .entry(name.into())
            .and_modify(|l| *l = (*l).min(line))
            .or_insert(line);
    }

    pub fn extend(&mut self, other: FieldSet) {
        for (name, line) in other.fields {
            self.insert(name, line);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn line_of(&self, name: &str) -> Option<u32> {
        self.fields.get(name).copied()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (name, line) in iter {
            set.insert(name, line);
        }
        set
    }
}

/// Input fields the handler reads.
pub type UsageSet = FieldSet;

/// What makes a returned object literal unanalysable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    /// `return { ...rest }`
    SpreadInReturn,
    /// `return { [key]: value }`
    ComputedKeyInReturn,
}

/// A returned object literal whose keys cannot be read off the syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralDefect {
    pub kind: DefectKind,
    pub line: u32,
}

/// Output fields the handler returns, plus what made the shape uncertain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnShape {
    pub produced: FieldSet,
    /// Line of the first return whose argument is not an object literal.
    pub dynamic_return: Option<u32>,
    /// Defects in source order.
    pub defects: Vec<StructuralDefect>,
}

impl ReturnShape {
    pub fn has_dynamic_return(&self) -> bool {
        self.dynamic_return.is_some()
    }

    /// Dynamic returns only, so the produced keys cannot be checked at all.
    pub fn is_unverifiable(&self) -> bool {
        self.has_dynamic_return() && self.produced.is_empty()
    }
}
