//! Advisory wiring checks.
//!
//! Issues describe wiring the rule table would not draw that way. They are
//! reported, never enforced: the solver still runs on the same topology.

use std::collections::{BTreeMap, HashMap};

use gf_core::Side;
use gf_graph::{Component, Topology};
use tracing::debug;

use crate::ProjectResult;
use crate::adapter::normalize;
use crate::schema::NetworkDef;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WiringIssue {
    #[error("Wire {wire} leaves {component} from side {side}, which is not an output")]
    IllegalOutputSide {
        wire: String,
        component: String,
        side: Side,
    },

    #[error("Wire {wire} enters {component} on side {side}, which is not an input")]
    IllegalInputSide {
        wire: String,
        component: String,
        side: Side,
    },

    #[error("Component {component} is fed on side {side} by more than one wire: {wires:?}")]
    MultipleFeeds {
        component: String,
        side: Side,
        wires: Vec<String>,
    },
}

/// Check a normalized topology. Per-wire issues come first in wire order,
/// then multiple feeds ordered by component id and side.
pub fn check_topology(topology: &Topology) -> Vec<WiringIssue> {
    let by_id: HashMap<&str, &Component> = topology
        .components
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect();
    let mut issues = Vec::new();
    let mut feeds: BTreeMap<(&str, Side), Vec<String>> = BTreeMap::new();

    for edge in &topology.edges {
        if let Some(source) = by_id.get(edge.source.component.as_str()).copied()
            && !source.rule().is_output_side_allowed(edge.source.side)
        {
            issues.push(WiringIssue::IllegalOutputSide {
                wire: edge.id.clone(),
                component: source.id.clone(),
                side: edge.source.side,
            });
        }

        let Some(target) = by_id.get(edge.target.component.as_str()).copied() else {
            continue;
        };
        let rule = target.rule();
        if !rule.is_input_side_allowed(edge.target.side) {
            issues.push(WiringIssue::IllegalInputSide {
                wire: edge.id.clone(),
                component: target.id.clone(),
                side: edge.target.side,
            });
        }
        if let Some(side) = rule.multiplicity_side(edge.target.side) {
            feeds
                .entry((target.id.as_str(), side))
                .or_default()
                .push(edge.id.clone());
        }
    }

    for ((component, side), wires) in feeds {
        if wires.len() > 1 {
            issues.push(WiringIssue::MultipleFeeds {
                component: component.to_string(),
                side,
                wires,
            });
        }
    }

    for issue in &issues {
        debug!(%issue, "wiring issue");
    }

    issues
}

/// Normalize `def` and check its wiring.
pub fn check_wiring(def: &NetworkDef) -> ProjectResult<Vec<WiringIssue>> {
    let topology = normalize(def)?;
    Ok(check_topology(&topology))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_components::{ComponentKind, OperatingData};
    use gf_core::PortRef;
    use gf_graph::Edge;

    fn edge(id: &str, from: (&str, Side), to: (&str, Side)) -> Edge {
        Edge::new(id, PortRef::new(from.0, from.1), PortRef::new(to.0, to.1))
    }

    #[test]
    fn clean_radial_feed_has_no_issues() {
        let topo = Topology::new(
            vec![
                Component::new("ps", ComponentKind::Source, OperatingData::default()),
                Component::new("ld", ComponentKind::Load, OperatingData::default()),
            ],
            vec![edge("e1", ("ps", Side::Bottom), ("ld", Side::Top))],
        );
        assert!(check_topology(&topo).is_empty());
    }

    #[test]
    fn backwards_wire_flags_both_ends() {
        let topo = Topology::new(
            vec![
                Component::new("ps", ComponentKind::Source, OperatingData::default()),
                Component::new("ld", ComponentKind::Load, OperatingData::default()),
            ],
            vec![edge("e1", ("ld", Side::Top), ("ps", Side::Bottom))],
        );
        let issues = check_topology(&topo);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], WiringIssue::IllegalOutputSide { .. }));
        assert!(matches!(issues[1], WiringIssue::IllegalInputSide { .. }));
    }

    #[test]
    fn edges_to_unknown_components_are_skipped() {
        let topo = Topology::new(
            vec![Component::new("ld", ComponentKind::Load, OperatingData::default())],
            vec![
                edge("e1", ("ghost", Side::Bottom), ("ld", Side::Top)),
                edge("e2", ("ld", Side::Bottom), ("ghost", Side::Top)),
            ],
        );
        assert_eq!(
            check_topology(&topo),
            vec![WiringIssue::IllegalOutputSide {
                wire: "e2".into(),
                component: "ld".into(),
                side: Side::Bottom,
            }]
        );
    }

    #[test]
    fn feeds_are_grouped_per_component() {
        let source = Component::new("ps", ComponentKind::Source, OperatingData::default());
        let mut components = vec![source];
        let mut edges = Vec::new();
        for i in 0..50 {
            let id = format!("ld{i}");
            edges.push(edge(&format!("e{i}"), ("ps", Side::Bottom), (&id, Side::Top)));
            components.push(Component::new(id, ComponentKind::Load, OperatingData::default()));
        }
        edges.push(edge("dup", ("ps", Side::Bottom), ("ld7", Side::Top)));

        let issues = check_topology(&Topology::new(components, edges));
        assert_eq!(
            issues,
            vec![WiringIssue::MultipleFeeds {
                component: "ld7".into(),
                side: Side::Top,
                wires: vec!["e7".into(), "dup".into()],
            }]
        );
    }
}
