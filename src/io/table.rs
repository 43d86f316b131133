//! # Matrix tables
//!
//! Renders the matrices of a [`ShortestPaths`] as right-aligned text tables whose rows and
//! columns are headed by the vertex labels in canonical order. Unreachable distances are printed
//! as `inf`, unset next hops as `N/A`.
//!
//! ```
//! use fwgraphs::{algo::*, io::*, prelude::*};
//!
//! let (graph, _) = LabeledGraph::from_parts([1, 2], [(1, 2, 7)], true);
//! let paths = graph.all_pairs_shortest_paths();
//!
//! assert_eq!(format_distance_matrix(&paths), "      1   2\n  1   0   7\n  2 inf   0\n");
//! ```

use std::fmt::Display;

use itertools::Itertools;

use crate::algo::ShortestPaths;

/// Marker printed for unset next hops
pub const MISSING_NEXT_HOP: &str = "N/A";

/// Renders `dist` with one row per source vertex
pub fn format_distance_matrix<L, W>(paths: &ShortestPaths<L, W>) -> String
where
    L: Ord + Display,
    W: Copy + Display,
{
    let ordering = paths.ordering();
    format_table(ordering.labels(), |i, j| {
        paths.distance(i, j).to_string()
    })
}

/// Renders `next` with one row per source vertex; cells hold the label of the next vertex
pub fn format_next_hop_matrix<L, W>(paths: &ShortestPaths<L, W>) -> String
where
    L: Ord + Display,
    W: Copy,
{
    let ordering = paths.ordering();
    format_table(ordering.labels(), |i, j| {
        paths
            .next_hop(i, j)
            .and_then(|v| ordering.label(v))
            .map_or_else(|| MISSING_NEXT_HOP.to_string(), |label| label.to_string())
    })
}

fn format_table<L, F>(labels: &[L], mut cell: F) -> String
where
    L: Display,
    F: FnMut(u32, u32) -> String,
{
    let n = labels.len() as u32;
    let headers = labels.iter().map(|l| l.to_string()).collect_vec();
    let cells = (0..n)
        .map(|i| (0..n).map(|j| cell(i, j)).collect_vec())
        .collect_vec();

    let width = headers
        .iter()
        .chain(cells.iter().flatten())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    let mut push_row = |head: &str, row: &[String]| {
        let line = std::iter::once(head)
            .chain(row.iter().map(String::as_str))
            .map(|s| format!("{s:>width$}"))
            .join(" ");
        table.push_str(&line);
        table.push('\n');
    };

    push_row("", &headers);
    for (head, row) in headers.iter().zip(&cells) {
        push_row(head, row);
    }
    table
}
