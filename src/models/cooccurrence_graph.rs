//! Word co-occurrence graph and weighted PageRank.
//!
//! Nodes are lowercased words; an undirected edge links two words that appear
//! within a sliding window of each other.

use crate::types::NodeId;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct GraphNode {
    /// Adjacency list: target node ID -> edge weight
    edges: FxHashMap<NodeId, f64>,
}

#[derive(Debug, Default)]
pub struct CooccurrenceGraph {
    word_to_id: FxHashMap<String, NodeId>,
    nodes: Vec<GraphNode>,
}

/// Settings for the power iteration.
#[derive(Debug, Copy, Clone)]
pub struct PageRankConfig {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl PageRankResult {
    pub fn score(&self, node: NodeId) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

impl CooccurrenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a sequence of words using a sliding window.
    ///
    /// Each word is linked to the following `window_size - 1` words.
    pub fn from_words<S: AsRef<str>>(words: &[S], window_size: usize) -> Self {
        let mut graph = Self::new();

        for (j, word) in words.iter().enumerate() {
            let node_j = graph.get_or_create_node(word.as_ref());

            for other in words.iter().take(j + window_size).skip(j + 1) {
                let node_k = graph.get_or_create_node(other.as_ref());
                graph.increment_edge(node_j, node_k, 1.0);
            }
        }

        graph
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> NodeId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as NodeId;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(GraphNode {
            edges: FxHashMap::default(),
        });
        id
    }

    pub fn node_id(&self, word: &str) -> Option<NodeId> {
        self.word_to_id.get(word).copied()
    }

    /// Increment the edge weight between two nodes, in both directions.
    pub fn increment_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, counting each undirected edge once
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Runs weighted PageRank with dangling-node mass redistribution.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn page_rank(&self, config: &PageRankConfig) -> PageRankResult {
        let n = self.nodes.len();
        if n == 0 {
            return PageRankResult {
                scores: vec![],
                iterations: 0,
                converged: true,
            };
        }

        let total_weights: Vec<f64> = self
            .nodes
            .iter()
            .map(|node| node.edges.values().sum::<f64>())
            .collect();

        let dangling_nodes: Vec<usize> = total_weights
            .iter()
            .enumerate()
            .filter(|(_, &weight)| weight == 0.0)
            .map(|(index, _)| index)
            .collect();

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let teleport = (1.0 - config.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < config.max_iterations && delta > config.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d]).sum();
            new_scores.fill(teleport + config.damping * dangling_mass / n as f64);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = total_weights[node];
                if total_weight > 0.0 {
                    for (&neighbor, &weight) in &self.nodes[node].edges {
                        new_scores[neighbor as usize] +=
                            config.damping * node_score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult {
            scores,
            iterations,
            converged: delta <= config.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: PageRankConfig = PageRankConfig {
        damping: 0.85,
        max_iterations: 100,
        threshold: 1e-6,
    };

    #[test]
    fn test_window_links_neighbors_only() {
        let graph = CooccurrenceGraph::from_words(&["a", "b", "c", "d"], 2);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_repeated_words_share_a_node() {
        let graph = CooccurrenceGraph::from_words(&["a", "b", "a"], 3);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_page_rank_scores_sum_to_one() {
        let graph = CooccurrenceGraph::from_words(&["a", "b", "c", "a", "d"], 3);
        let result = graph.page_rank(&CONFIG);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(result.converged);
    }

    #[test]
    fn test_page_rank_hub_ranks_highest() {
        // "hub" co-occurs with every spoke
        let graph =
            CooccurrenceGraph::from_words(&["x", "hub", "y", "hub", "z", "hub", "w"], 2);
        let result = graph.page_rank(&CONFIG);
        let hub = graph.node_id("hub").unwrap();

        for word in ["x", "y", "z", "w"] {
            let spoke = graph.node_id(word).unwrap();
            assert!(result.score(hub) > result.score(spoke));
        }
    }

    #[test]
    fn test_page_rank_single_dangling_node() {
        let graph = CooccurrenceGraph::from_words(&["solo"], 3);
        let result = graph.page_rank(&CONFIG);
        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_page_rank_empty_graph() {
        let graph = CooccurrenceGraph::new();
        assert!(graph.page_rank(&CONFIG).scores.is_empty());
    }
}
