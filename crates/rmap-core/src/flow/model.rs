//! Flow graph payload handed to the diagram renderer.

use serde::{Deserialize, Serialize};

/// A stage box in the flow diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub stage_name: String,
    /// Number of distinct applications that passed through this stage.
    pub occupancy_count: usize,
}

/// Aggregated stage-to-stage transitions for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLink {
    /// Index into [`FlowGraph::nodes`].
    pub source_index: usize,
    /// Index into [`FlowGraph::nodes`].
    pub target_index: usize,
    pub weight: usize,
    pub channel: String,
}

/// Directed multigraph of stage transitions.
///
/// Nodes are sorted by stage name. Two links may join the same pair of nodes
/// when they belong to different channels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    /// True when there is something to draw: at least one node and one link.
    pub fn is_renderable(&self) -> bool {
        !self.nodes.is_empty() && !self.links.is_empty()
    }

    pub fn node(&self, stage_name: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.stage_name == stage_name)
    }

    /// Sum of link weights, i.e. the number of recorded transitions.
    pub fn total_transitions(&self) -> usize {
        self.links.iter().map(|link| link.weight).sum()
    }
}
