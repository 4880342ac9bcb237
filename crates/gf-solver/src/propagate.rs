//! Multi-source breadth-first reachability.

use std::collections::VecDeque;

use gf_core::PortIdx;
use gf_graph::ConnectivityGraph;

/// First-seen BFS distance of every port slot; `None` means un-energized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances(Vec<Option<u32>>);

impl Distances {
    pub fn get(&self, port: PortIdx) -> Option<u32> {
        self.0.get(port.slot()).copied().flatten()
    }

    pub fn is_energized(&self, port: PortIdx) -> bool {
        self.get(port).is_some()
    }

    pub fn energized_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_some()).count()
    }

    /// `(slot, distance)` for every energized port, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(slot, d)| d.map(|d| (slot, d)))
    }
}

/// Seed every source's bottom port at distance 0 and expand along the
/// adjacency. BFS distances are shortest-path lengths, so the result does
/// not depend on neighbour order.
pub fn propagate(graph: &ConnectivityGraph) -> Distances {
    let mut distance: Vec<Option<u32>> = vec![None; graph.port_count()];
    let mut queue = VecDeque::new();

    for port in graph.source_ports() {
        if let Some(slot) = distance.get_mut(port.slot())
            && slot.is_none()
        {
            *slot = Some(0);
            queue.push_back(port);
        }
    }

    while let Some(current) = queue.pop_front() {
        let base = distance[current.slot()].unwrap_or(0);
        for &next in graph.neighbors(current) {
            let slot = &mut distance[next.slot()];
            if slot.is_none() {
                *slot = Some(base + 1);
                queue.push_back(next);
            }
        }
    }

    Distances(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_components::{ComponentKind, OperatingData, Status};
    use gf_core::{PortRef, Side};
    use gf_graph::{Component, Edge, Topology};

    fn port(c: &str, s: Side) -> PortRef {
        PortRef::new(c, s)
    }

    fn dist(graph: &ConnectivityGraph, d: &Distances, c: &str, s: Side) -> Option<u32> {
        d.get(graph.index().port_idx(&port(c, s)).unwrap())
    }

    #[test]
    fn chain_distances() {
        let graph = ConnectivityGraph::from_topology(Topology::new(
            vec![
                Component::new("ps", ComponentKind::Source, OperatingData::default()),
                Component::new(
                    "sw",
                    ComponentKind::Switch,
                    OperatingData::default().with_status(Status::On),
                ),
                Component::new("ld", ComponentKind::Load, OperatingData::default()),
            ],
            vec![
                Edge::new("e1", port("ps", Side::Bottom), port("sw", Side::Top)),
                Edge::new("e2", port("sw", Side::Bottom), port("ld", Side::Top)),
            ],
        ))
        .unwrap();
        let d = propagate(&graph);

        assert_eq!(dist(&graph, &d, "ps", Side::Bottom), Some(0));
        assert_eq!(dist(&graph, &d, "sw", Side::Top), Some(1));
        assert_eq!(dist(&graph, &d, "sw", Side::Bottom), Some(2));
        assert_eq!(dist(&graph, &d, "ld", Side::Top), Some(3));
        assert_eq!(dist(&graph, &d, "ld", Side::Bottom), None);
        assert_eq!(dist(&graph, &d, "ps", Side::Top), None);
        assert_eq!(d.energized_count(), 4);
    }

    #[test]
    fn transformer_blocks_back_feed() {
        let graph = ConnectivityGraph::from_topology(Topology::new(
            vec![
                Component::new("ps", ComponentKind::Source, OperatingData::default()),
                Component::new("tx", ComponentKind::Transformer, OperatingData::default()),
            ],
            vec![Edge::new("e1", port("ps", Side::Bottom), port("tx", Side::Bottom))],
        ))
        .unwrap();
        let d = propagate(&graph);

        assert_eq!(dist(&graph, &d, "tx", Side::Bottom), Some(1));
        assert_eq!(dist(&graph, &d, "tx", Side::Top), None);
    }

    #[test]
    fn no_sources_no_energy() {
        let graph = ConnectivityGraph::from_topology(Topology::new(
            vec![Component::new("bus", ComponentKind::Bus, OperatingData::default())],
            vec![],
        ))
        .unwrap();
        let d = propagate(&graph);
        assert_eq!(d.energized_count(), 0);
        assert_eq!(d.iter().count(), 0);
    }
}
