//! Stable indexing for solver integration.
//!
//! Components get contiguous indices in topology order; each component owns
//! a block of four port slots, `component * 4 + side.slot()`.

use std::collections::HashMap;

use gf_core::{CompIdx, Id, PortIdx, PortRef, Side};

use crate::error::{GraphError, GraphResult};
use crate::topology::Topology;

const PORTS_PER_COMPONENT: usize = 4;

/// Bidirectional lookup between component ids / port refs and arena slots.
#[derive(Debug, Clone, Default)]
pub struct PortIndex {
    /// Contiguous list of component ids (index -> id).
    comp_ids: Vec<String>,

    /// Reverse lookup: id -> index.
    comp_to_idx: HashMap<String, CompIdx>,
}

impl PortIndex {
    /// Build an index from a topology whose ids are already known unique.
    pub fn from_topology(topology: &Topology) -> Self {
        let comp_ids: Vec<String> = topology.components.iter().map(|c| c.id.clone()).collect();
        let comp_to_idx = comp_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), Id::from_index(i as u32)))
            .collect();
        Self {
            comp_ids,
            comp_to_idx,
        }
    }

    pub fn comp_count(&self) -> usize {
        self.comp_ids.len()
    }

    pub fn port_count(&self) -> usize {
        self.comp_ids.len() * PORTS_PER_COMPONENT
    }

    pub fn comp_idx(&self, id: &str) -> Option<CompIdx> {
        self.comp_to_idx.get(id).copied()
    }

    /// Component id for a contiguous index (panics if out of bounds).
    pub fn comp_id(&self, idx: CompIdx) -> &str {
        &self.comp_ids[idx.slot()]
    }

    /// Port slot of one side of a component.
    pub fn port_of(&self, comp: CompIdx, side: Side) -> PortIdx {
        Id::from_index((comp.slot() * PORTS_PER_COMPONENT + side.slot()) as u32)
    }

    pub fn port_idx(&self, port: &PortRef) -> GraphResult<PortIdx> {
        self.comp_idx(&port.component)
            .map(|comp| self.port_of(comp, port.side))
            .ok_or_else(|| GraphError::PortNotFound { port: port.clone() })
    }

    /// Owning component and side of a port slot.
    pub fn split(&self, port: PortIdx) -> (CompIdx, Side) {
        let slot = port.slot();
        let side = Side::ALL[slot % PORTS_PER_COMPONENT];
        (Id::from_index((slot / PORTS_PER_COMPONENT) as u32), side)
    }

    /// Port reference for a slot (panics if out of bounds).
    pub fn port_ref(&self, port: PortIdx) -> PortRef {
        let (comp, side) = self.split(port);
        PortRef::new(self.comp_id(comp), side)
    }

    /// All four port slots of a component, in side order.
    pub fn ports_of(&self, comp: CompIdx) -> [PortIdx; 4] {
        Side::ALL.map(|side| self.port_of(comp, side))
    }
}
