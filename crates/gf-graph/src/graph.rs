//! The immutable port-level connectivity graph.

use gf_core::{CompIdx, Id, PortIdx, PortRef, Side};

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::indexing::PortIndex;
use crate::topology::{Component, Edge, Topology};

/// One adjacency structure over every port of every component.
///
/// Holds:
/// - the topology it was built from (components and edges, in input order)
/// - the port index mapping `componentId:side` to contiguous slots
/// - compact adjacency: port i's neighbours are
///   `neighbors[offsets[i]..offsets[i + 1]]`, sorted and deduplicated
///
/// Wires and bidirectional internal links appear in both directions;
/// a transformer's primary-to-secondary link appears only forward.
/// Re-solving after any state change needs a fresh build.
#[derive(Debug, Clone)]
pub struct ConnectivityGraph {
    pub(crate) topology: Topology,
    pub(crate) index: PortIndex,
    pub(crate) offsets: Vec<usize>,
    pub(crate) neighbors: Vec<PortIdx>,
    /// Resolved `(source, target)` slots, aligned with `topology.edges`.
    pub(crate) edge_ports: Vec<(PortIdx, PortIdx)>,
}

impl ConnectivityGraph {
    /// Validate a topology and build its graph.
    pub fn from_topology(topology: Topology) -> GraphResult<Self> {
        Ok(GraphBuilder::new(topology)?.build())
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn index(&self) -> &PortIndex {
        &self.index
    }

    pub fn components(&self) -> &[Component] {
        &self.topology.components
    }

    pub fn edges(&self) -> &[Edge] {
        &self.topology.edges
    }

    /// Component at a contiguous index (panics if out of bounds).
    pub fn component_at(&self, idx: CompIdx) -> &Component {
        &self.topology.components[idx.slot()]
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.index.comp_idx(id).map(|idx| self.component_at(idx))
    }

    pub fn port_count(&self) -> usize {
        self.index.port_count()
    }

    /// Number of directed adjacency entries.
    pub fn link_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Ports reachable in one step from `port`.
    pub fn neighbors(&self, port: PortIdx) -> &[PortIdx] {
        let idx = port.slot();
        if idx + 1 >= self.offsets.len() {
            return &[];
        }
        &self.neighbors[self.offsets[idx]..self.offsets[idx + 1]]
    }

    pub fn has_link(&self, from: &PortRef, to: &PortRef) -> bool {
        match (self.index.port_idx(from), self.index.port_idx(to)) {
            (Ok(a), Ok(b)) => self.neighbors(a).binary_search(&b).is_ok(),
            _ => false,
        }
    }

    /// Resolved endpoint slots of the edge at `edge_pos` in `edges()`.
    pub fn edge_ports(&self, edge_pos: usize) -> Option<(PortIdx, PortIdx)> {
        self.edge_ports.get(edge_pos).copied()
    }

    /// Origin ports: the bottom port of every source, in topology order.
    pub fn source_ports(&self) -> Vec<PortIdx> {
        self.topology
            .components
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_source())
            .map(|(i, _)| self.index.port_of(Id::from_index(i as u32), Side::Bottom))
            .collect()
    }
}
