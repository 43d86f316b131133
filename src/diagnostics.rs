/*!
# Diagnostics

Non-fatal conditions observed while loading a graph or running the engine are collected as typed
[`Diagnostic`] records and returned next to the primary result. Each record is also emitted through
the `log` facade at `warn` level when it is pushed, so a caller that only installs a logger still
sees them.
*/

use std::fmt::{Debug, Display};

use log::warn;

/// A single non-fatal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic<L> {
    /// An edge referenced a label that is not a vertex of the graph; the edge was skipped.
    UnknownEndpoint { source: L, target: L },
    /// A vertex label was inserted twice; the second insertion was ignored.
    DuplicateVertex(L),
    /// `dist[v][v] < 0` after relaxation: `vertex` lies on or reaches a negative cycle.
    /// Rows and columns touching it do not hold meaningful shortest distances.
    NegativeCycle { vertex: L },
}

impl<L: Debug> Display for Diagnostic<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownEndpoint { source, target } => write!(
                f,
                "edge ({source:?}, {target:?}) references an unknown vertex and was skipped"
            ),
            Diagnostic::DuplicateVertex(label) => {
                write!(f, "vertex {label:?} inserted twice; duplicate ignored")
            }
            Diagnostic::NegativeCycle { vertex } => {
                write!(f, "negative cycle detected involving vertex {vertex:?}")
            }
        }
    }
}

/// An ordered collection of [`Diagnostic`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics<L> {
    records: Vec<Diagnostic<L>>,
}

impl<L> Default for Diagnostics<L> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<L: Debug> Diagnostics<L> {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it
    pub fn push(&mut self, record: Diagnostic<L>) {
        warn!("{record}");
        self.records.push(record);
    }

    /// Appends all records of `other` without logging them a second time
    pub fn extend(&mut self, other: Diagnostics<L>) {
        self.records.extend(other.records);
    }

    /// Returns *true* if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates over all records in the order they were pushed
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic<L>> + '_ {
        self.records.iter()
    }

    /// Iterates over the vertices reported in [`Diagnostic::NegativeCycle`] records
    pub fn negative_cycle_vertices(&self) -> impl Iterator<Item = &L> + '_ {
        self.records.iter().filter_map(|d| match d {
            Diagnostic::NegativeCycle { vertex } => Some(vertex),
            _ => None,
        })
    }

    /// Returns the underlying records
    pub fn into_vec(self) -> Vec<Diagnostic<L>> {
        self.records
    }
}

impl<L> IntoIterator for Diagnostics<L> {
    type Item = Diagnostic<L>;
    type IntoIter = std::vec::IntoIter<Diagnostic<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
