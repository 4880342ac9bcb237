//! Integration tests for gf-graph.

use gf_components::{ComponentKind, OperatingData, Status};
use gf_core::{PortRef, Side};
use gf_graph::{Component, ConnectivityGraph, Edge, GraphError, Topology};

fn port(c: &str, s: Side) -> PortRef {
    PortRef::new(c, s)
}

fn comp(id: &str, kind: ComponentKind) -> Component {
    Component::new(id, kind, OperatingData::default())
}

#[test]
fn bus_is_fully_meshed() {
    let graph = ConnectivityGraph::from_topology(Topology::new(
        vec![comp("bus", ComponentKind::Bus)],
        vec![],
    ))
    .unwrap();

    for a in Side::ALL {
        for b in Side::ALL {
            assert_eq!(
                graph.has_link(&port("bus", a), &port("bus", b)),
                a != b,
                "{a} -> {b}"
            );
        }
    }
    assert_eq!(graph.link_count(), 12);
}

#[test]
fn wires_conduct_both_ways() {
    let graph = ConnectivityGraph::from_topology(Topology::new(
        vec![
            comp("ps", ComponentKind::Source),
            comp("ld", ComponentKind::Load),
        ],
        vec![Edge::new("e1", port("ps", Side::Bottom), port("ld", Side::Top))],
    ))
    .unwrap();

    assert!(graph.has_link(&port("ps", Side::Bottom), &port("ld", Side::Top)));
    assert!(graph.has_link(&port("ld", Side::Top), &port("ps", Side::Bottom)));
    // sources and loads add nothing internally
    assert_eq!(graph.link_count(), 2);

    let (src, dst) = graph.edge_ports(0).unwrap();
    assert_eq!(graph.index().port_ref(src), port("ps", Side::Bottom));
    assert_eq!(graph.index().port_ref(dst), port("ld", Side::Top));
    assert_eq!(graph.source_ports(), vec![src]);
}

#[test]
fn tie_switch_ignores_vertical_ports() {
    let tie = Component::new(
        "tie",
        ComponentKind::Switch,
        OperatingData::default()
            .with_status(Status::On)
            .with_sub_type("tie"),
    );
    let graph = ConnectivityGraph::from_topology(Topology::new(vec![tie], vec![])).unwrap();

    assert!(graph.has_link(&port("tie", Side::Left), &port("tie", Side::Right)));
    assert!(graph.has_link(&port("tie", Side::Right), &port("tie", Side::Left)));
    assert!(!graph.has_link(&port("tie", Side::Top), &port("tie", Side::Bottom)));
}

#[test]
fn open_tie_switch_is_open_circuit() {
    let tie = Component::new(
        "tie",
        ComponentKind::Switch,
        OperatingData::default()
            .with_status(Status::Off)
            .with_sub_type("tie"),
    );
    let graph = ConnectivityGraph::from_topology(Topology::new(vec![tie], vec![])).unwrap();
    assert_eq!(graph.link_count(), 0);
}

#[test]
fn duplicate_wires_collapse() {
    let graph = ConnectivityGraph::from_topology(Topology::new(
        vec![
            comp("ps", ComponentKind::Source),
            comp("ld", ComponentKind::Load),
        ],
        vec![
            Edge::new("e1", port("ps", Side::Bottom), port("ld", Side::Top)),
            Edge::new("e2", port("ld", Side::Top), port("ps", Side::Bottom)),
        ],
    ))
    .unwrap();

    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.link_count(), 2);
}

#[test]
fn malformed_topology_is_rejected() {
    let result = ConnectivityGraph::from_topology(Topology::new(
        vec![comp("ps", ComponentKind::Source)],
        vec![Edge::new("e1", port("ps", Side::Bottom), port("gone", Side::Top))],
    ));
    let err = result.unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownComponent {
            edge: "e1".into(),
            component: "gone".into(),
        }
    );
    assert!(err.to_string().contains("gone"));
}

#[test]
fn component_lookup_by_id() {
    let graph = ConnectivityGraph::from_topology(Topology::new(
        vec![
            comp("a", ComponentKind::Bus),
            comp("b", ComponentKind::Transformer),
        ],
        vec![],
    ))
    .unwrap();

    assert_eq!(
        graph.component("b").map(|c| c.kind),
        Some(ComponentKind::Transformer)
    );
    assert!(graph.component("c").is_none());
    assert_eq!(graph.components().len(), 2);
    assert_eq!(graph.port_count(), 8);
}
