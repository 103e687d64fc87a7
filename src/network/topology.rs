//! Interaction graph and scale-free topology generation

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{DaissError, Result};
use crate::core::types::NodeId;

/// Undirected simple graph stored as per-node adjacency lists
///
/// Built once per simulation and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Graph with `nodes` isolated nodes
    pub fn empty(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Build a graph from an explicit edge list
    pub fn from_edges(nodes: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut graph = Self::empty(nodes);
        for &(a, b) in edges {
            if a >= nodes || b >= nodes {
                return Err(DaissError::InvalidConfig(format!(
                    "edge ({}, {}) references a node outside 0..{}",
                    a, b, nodes
                )));
            }
            graph.add_edge(a, b);
        }
        Ok(graph)
    }

    /// Path graph 0 - 1 - ... - (nodes - 1)
    pub fn path(nodes: usize) -> Self {
        let mut graph = Self::empty(nodes);
        for i in 1..nodes {
            graph.add_edge(i - 1, i);
        }
        graph
    }

    /// Add an undirected edge; self-loops and duplicates are ignored
    ///
    /// Returns whether the edge was new.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || self.adjacency[a].contains(&b) {
            return false;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        true
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Canonical edge set: `(low, high)` pairs in ascending order
    pub fn edges(&self) -> BTreeSet<(NodeId, NodeId)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, nbrs)| nbrs.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
            .collect()
    }

    /// Nodes with no neighbors
    pub fn isolated_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, nbrs)| nbrs.is_empty())
            .map(|(id, _)| id)
    }
}

/// Generate a Barabási–Albert preferential attachment graph
///
/// Nodes `0..attachment` seed the process without edges between them. Each
/// following node links to `attachment` distinct existing nodes, sampled
/// from a pool in which every node appears once per incident edge, so
/// selection is proportional to degree.
pub fn barabasi_albert<R: Rng + ?Sized>(
    nodes: usize,
    attachment: usize,
    rng: &mut R,
) -> Result<Graph> {
    if attachment == 0 || attachment >= nodes {
        return Err(DaissError::InvalidConfig(format!(
            "attachment degree must be in 1..{}, got {}",
            nodes, attachment
        )));
    }

    let mut graph = Graph::empty(nodes);
    let mut targets: Vec<NodeId> = (0..attachment).collect();
    let mut repeated: Vec<NodeId> = Vec::with_capacity(2 * attachment * nodes);

    for source in attachment..nodes {
        for &target in &targets {
            graph.add_edge(source, target);
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(std::iter::repeat(source).take(attachment));

        targets = sample_distinct(&repeated, attachment, rng);
    }

    tracing::debug!(
        nodes,
        attachment,
        edges = graph.edge_count(),
        "Built preferential attachment graph"
    );

    Ok(graph)
}

/// Draw uniformly from `pool` until `count` distinct nodes are collected
///
/// The result is sorted so edge insertion order depends only on the draws.
fn sample_distinct<R: Rng + ?Sized>(pool: &[NodeId], count: usize, rng: &mut R) -> Vec<NodeId> {
    let mut chosen = BTreeSet::new();
    while chosen.len() < count {
        chosen.insert(pool[rng.gen_range(0..pool.len())]);
    }
    chosen.into_iter().collect()
}
