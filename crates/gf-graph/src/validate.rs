//! Topology validation logic.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::topology::Topology;

/// Reject malformed topologies: duplicate ids and edges whose endpoints
/// name components that don't exist. Nothing is silently dropped.
pub(crate) fn validate_references(topology: &Topology) -> GraphResult<()> {
    let mut component_ids: HashSet<&str> = HashSet::with_capacity(topology.components.len());
    for component in &topology.components {
        if !component_ids.insert(component.id.as_str()) {
            return Err(GraphError::DuplicateComponent {
                id: component.id.clone(),
            });
        }
    }

    let mut edge_ids: HashSet<&str> = HashSet::with_capacity(topology.edges.len());
    for edge in &topology.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(GraphError::DuplicateEdge {
                id: edge.id.clone(),
            });
        }
        for endpoint in [&edge.source, &edge.target] {
            if !component_ids.contains(endpoint.component.as_str()) {
                return Err(GraphError::UnknownComponent {
                    edge: edge.id.clone(),
                    component: endpoint.component.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Component, Edge};
    use gf_components::{ComponentKind, OperatingData};
    use gf_core::{PortRef, Side};

    fn bus(id: &str) -> Component {
        Component::new(id, ComponentKind::Bus, OperatingData::default())
    }

    fn wire(id: &str, from: &str, to: &str) -> Edge {
        Edge::new(
            id,
            PortRef::new(from, Side::Bottom),
            PortRef::new(to, Side::Top),
        )
    }

    #[test]
    fn validate_empty_topology() {
        assert!(validate_references(&Topology::default()).is_ok());
    }

    #[test]
    fn validate_dangling_target() {
        let topo = Topology::new(vec![bus("b1")], vec![wire("e1", "b1", "ghost")]);
        assert_eq!(
            validate_references(&topo),
            Err(GraphError::UnknownComponent {
                edge: "e1".into(),
                component: "ghost".into(),
            })
        );
    }

    #[test]
    fn validate_dangling_source() {
        let topo = Topology::new(vec![bus("b1")], vec![wire("e1", "ghost", "b1")]);
        assert!(matches!(
            validate_references(&topo),
            Err(GraphError::UnknownComponent { .. })
        ));
    }

    #[test]
    fn validate_duplicates() {
        let topo = Topology::new(vec![bus("b1"), bus("b1")], vec![]);
        assert_eq!(
            validate_references(&topo),
            Err(GraphError::DuplicateComponent { id: "b1".into() })
        );

        let topo = Topology::new(
            vec![bus("b1"), bus("b2")],
            vec![wire("e1", "b1", "b2"), wire("e1", "b2", "b1")],
        );
        assert_eq!(
            validate_references(&topo),
            Err(GraphError::DuplicateEdge { id: "e1".into() })
        );
    }
}
