//! Text renderings of a graph. Everything here only reads `len()` and
//! `has(i, j)`.

use itertools::Itertools;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Formats the graph as an adjacency list on multiple lines.
///
/// ```text
/// 0: 0 2
/// 1: 0 1
/// 2: 1 2
/// ```
pub fn format_adjacency<G: Graph>(g: &G) -> String {
    let nodes = g.len();
    (0..nodes)
        .map(|i| {
            let targets = (0..nodes).filter(|&j| g.has(i, j)).map(|j| format!(" {j}")).join("");
            format!("{i}:{targets}\n")
        })
        .collect()
}

/// Formats the graph as a list of edges on a single line, e.g.
/// `[(0 0) (0 2) (1 0)]`.
pub fn format_list<G: Graph>(g: &G) -> String {
    format!("[{}]", g.edges().iter().map(|(i, j)| format!("({i} {j})")).join(" "))
}

/// Formats the graph as an ASCII grid, `#` for an edge and `.` otherwise.
pub fn format_grid<G: Graph>(g: &G) -> String {
    let nodes = g.len();
    let mut b = String::with_capacity(nodes * (nodes + 1));
    for i in 0..nodes {
        b.extend((0..nodes).map(|j| if g.has(i, j) { '#' } else { '.' }));
        b.push('\n');
    }
    b
}

/// Formats the graph as a 0/1 matrix framed with Unicode brackets.
///
/// ```text
/// ⎡1 0 1⎤
/// ⎢1 1 0⎥
/// ⎣0 1 1⎦
/// ```
pub fn format_matrix<G: Graph>(g: &G) -> String {
    let nodes = g.len();
    let mut b = String::new();
    for i in 0..nodes {
        let (open, close) = match (i, nodes) {
            (_, 1) => ('[', ']'),
            (0, _) => ('⎡', '⎤'),
            (i, n) if i == n - 1 => ('⎣', '⎦'),
            _ => ('⎢', '⎥'),
        };
        b.push(open);
        for j in 0..nodes {
            if j > 0 {
                b.push(' ');
            }
            b.push(if g.has(i, j) { '1' } else { '0' });
        }
        b.push(close);
        b.push('\n');
    }
    b
}

/// Formats the graph as a grid with named rows and columns. Each label
/// names the node at the same index, so there must be exactly `len()` of
/// them.
///
/// ```text
///   a b c
/// a x . x
/// b x x .
/// c . x x
/// ```
pub fn format_labeled<G, S>(g: &G, labels: &[S]) -> Result<String>
where
    G: Graph,
    S: AsRef<str>,
{
    let nodes = g.len();
    if labels.len() != nodes {
        return Err(GraphError::InvalidArgument(format!(
            "got {} labels for a graph of rank {nodes}",
            labels.len()
        )));
    }
    let width = labels.iter().map(|l| l.as_ref().chars().count()).max().unwrap_or(0);

    let header = labels.iter().map(|l| format!(" {:>width$}", l.as_ref())).join("");
    let rows = labels.iter().enumerate().map(|(i, label)| {
        let cells = (0..nodes)
            .map(|j| format!(" {:>width$}", if g.has(i, j) { "x" } else { "." }))
            .join("");
        format!("{:<width$}{cells}\n", label.as_ref())
    });
    Ok(format!("{:width$}{header}\n", "") + &rows.collect::<String>())
}
