//! Connectivity graph builder.

use gf_components::Conduction;
use gf_core::PortIdx;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::ConnectivityGraph;
use crate::indexing::PortIndex;
use crate::topology::Topology;
use crate::validate;

/// Builder that expands a topology into port-level links.
///
/// `new` validates references up front, so a builder always holds a
/// well-formed topology. `build` adds every wire and every component's
/// internal conduction, then freezes the result.
#[derive(Debug)]
pub struct GraphBuilder {
    topology: Topology,
    index: PortIndex,
    links: Vec<(PortIdx, PortIdx)>,
    edge_ports: Vec<(PortIdx, PortIdx)>,
}

impl GraphBuilder {
    /// Validate `topology` and prepare to build its graph.
    pub fn new(topology: Topology) -> GraphResult<Self> {
        validate::validate_references(&topology)?;
        let index = PortIndex::from_topology(&topology);

        let edge_ports = topology
            .edges
            .iter()
            .map(|edge| {
                let from = index.port_idx(&edge.source)?;
                let to = index.port_idx(&edge.target)?;
                Ok((from, to))
            })
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(Self {
            topology,
            index,
            links: Vec::new(),
            edge_ports,
        })
    }

    /// Add a one-way link.
    pub fn add_link(&mut self, from: PortIdx, to: PortIdx) {
        self.links.push((from, to));
    }

    /// Add a link in both directions.
    pub fn add_bidirectional(&mut self, a: PortIdx, b: PortIdx) {
        self.add_link(a, b);
        self.add_link(b, a);
    }

    /// Wires conduct both ways regardless of their declared direction.
    fn add_wiring(&mut self) {
        for i in 0..self.edge_ports.len() {
            let (source, target) = self.edge_ports[i];
            self.add_bidirectional(source, target);
        }
    }

    /// Conduction inside each component, as its rule dictates for the
    /// current operating data (bus mesh, closed switches, transformer).
    fn add_internal_links(&mut self) {
        for i in 0..self.topology.components.len() {
            let component = &self.topology.components[i];
            let comp = match self.index.comp_idx(&component.id) {
                Some(comp) => comp,
                None => continue,
            };
            let links = component.rule().internal_links(&component.data);
            for link in links {
                let from = self.index.port_of(comp, link.from);
                let to = self.index.port_of(comp, link.to);
                match link.conduction {
                    Conduction::Bidirectional => self.add_bidirectional(from, to),
                    Conduction::Forward => self.add_link(from, to),
                }
            }
        }
    }

    /// Build the immutable graph.
    pub fn build(mut self) -> ConnectivityGraph {
        self.add_wiring();
        self.add_internal_links();

        let (offsets, neighbors) = Self::build_adjacency(self.index.port_count(), &self.links);

        debug!(
            components = self.topology.components.len(),
            edges = self.topology.edges.len(),
            ports = offsets.len() - 1,
            links = neighbors.len(),
            "built connectivity graph"
        );

        ConnectivityGraph {
            topology: self.topology,
            index: self.index,
            offsets,
            neighbors,
            edge_ports: self.edge_ports,
        }
    }

    /// Build compact adjacency: for each port, its sorted, deduplicated
    /// neighbours.
    fn build_adjacency(
        port_count: usize,
        links: &[(PortIdx, PortIdx)],
    ) -> (Vec<usize>, Vec<PortIdx>) {
        let mut per_port: Vec<Vec<PortIdx>> = vec![Vec::new(); port_count];
        for &(from, to) in links {
            if let Some(list) = per_port.get_mut(from.slot()) {
                list.push(to);
            }
        }

        let mut offsets = Vec::with_capacity(port_count + 1);
        let mut flat = Vec::with_capacity(links.len());
        offsets.push(0);
        for mut list in per_port {
            list.sort();
            list.dedup();
            flat.extend_from_slice(&list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
