//! Conversion from the editor's network definition to a normalized topology.
//!
//! Wiring checks and normalization both go through [`infer_side`], so the
//! side a wire is judged against is always the side the solver sees.

use std::collections::{HashMap, HashSet};

use gf_components::{ComponentKind, OperatingData, Status};
use gf_core::{PortRef, Real, Side, ensure_finite};
use gf_graph::{Component, Edge, GraphError, Position, Topology};
use tracing::debug;

use crate::schema::{ComponentDef, NetworkDef, WireDef};
use crate::{ProjectError, ProjectResult};

/// Which end of a wire a side is being inferred for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEnd {
    Source,
    Target,
}

/// Side named by a connection handle such as `left-target`, if any.
pub fn side_from_handle(handle: &str) -> Option<Side> {
    [Side::Left, Side::Right, Side::Top, Side::Bottom]
        .into_iter()
        .find(|side| handle.contains(side.as_str()))
}

/// Side of `component` that a wire end attaches to.
///
/// An explicit handle always wins. Otherwise the component type and the
/// relative position of the component at the other end decide.
pub fn infer_side(
    component: &Component,
    other: Option<&Component>,
    handle: Option<&str>,
    end: WireEnd,
) -> Side {
    if let Some(side) = handle.and_then(side_from_handle) {
        return side;
    }

    let here = component.position.unwrap_or_default();
    let there = other.map(|o| o.position.unwrap_or_default());

    match component.kind {
        ComponentKind::Switch if component.data.is_tie() => match there {
            Some(p) if p.x >= here.x => Side::Right,
            _ => Side::Left,
        },
        ComponentKind::Switch => match there {
            Some(p) if p.y < here.y => Side::Top,
            _ => Side::Bottom,
        },
        ComponentKind::Source => Side::Bottom,
        ComponentKind::Load => Side::Top,
        ComponentKind::Bus => match there {
            Some(p) if p.x < here.x => Side::Left,
            Some(p) if p.x > here.x => Side::Right,
            Some(p) if p.y < here.y => Side::Top,
            _ => Side::Bottom,
        },
        ComponentKind::Transformer => match end {
            WireEnd::Source => Side::Bottom,
            WireEnd::Target => Side::Top,
        },
    }
}

/// Wire voltage known at normalization time.
///
/// Transformers are skipped: their voltage depends on which winding the
/// wire lands on, which only the solver resolves.
pub fn resolve_edge_voltage(
    wire: &WireDef,
    source: &Component,
    target: &Component,
) -> Option<Real> {
    fn configured(c: &Component) -> Option<Real> {
        match c.kind {
            ComponentKind::Transformer => None,
            _ => c.data.voltage,
        }
    }

    wire.voltage_override()
        .or_else(|| configured(source))
        .or_else(|| configured(target))
}

/// Convert one component definition. A missing type means bus.
pub fn to_component(def: &ComponentDef) -> ProjectResult<Component> {
    let kind = match def.kind.as_deref() {
        None => ComponentKind::Bus,
        Some(name) => name
            .parse::<ComponentKind>()
            .map_err(|_| ProjectError::UnknownComponentType {
                component: def.id.clone(),
                kind: name.to_string(),
            })?,
    };

    let finite = |what: &'static str, value: Option<f64>| -> ProjectResult<Option<Real>> {
        value
            .map(|v| ensure_finite(v, what))
            .transpose()
            .map_err(ProjectError::from)
    };

    let d = &def.data;
    let data = OperatingData {
        status: d.status.as_deref().map(Status::from),
        sub_type: d.sub_type.clone(),
        voltage: finite("voltage", d.voltage)?,
        ratio: finite("ratio", d.ratio)?,
        capacity: finite("capacity", d.capacity)?,
        rated_current: finite("rated current", d.rated_current)?,
    };

    let position = Position::new(
        ensure_finite(def.position.x, "position x")?,
        ensure_finite(def.position.y, "position y")?,
    );

    Ok(Component {
        id: def.id.clone(),
        kind,
        data,
        position: Some(position),
    })
}

/// Normalize a network definition into the solver's topology.
///
/// Rejects unknown component types, non-finite numbers, duplicate ids and
/// wires that reference missing components.
pub fn normalize(def: &NetworkDef) -> ProjectResult<Topology> {
    let components = def
        .components
        .iter()
        .map(to_component)
        .collect::<ProjectResult<Vec<_>>>()?;

    let mut by_id: HashMap<&str, &Component> = HashMap::with_capacity(components.len());
    for component in &components {
        if by_id.insert(component.id.as_str(), component).is_some() {
            return Err(GraphError::DuplicateComponent {
                id: component.id.clone(),
            }
            .into());
        }
    }

    let mut wire_ids = HashSet::with_capacity(def.wires.len());
    let mut edges = Vec::with_capacity(def.wires.len());
    for wire in &def.wires {
        if !wire_ids.insert(wire.id.as_str()) {
            return Err(GraphError::DuplicateEdge {
                id: wire.id.clone(),
            }
            .into());
        }
        if let Some(voltage) = wire.voltage_override() {
            ensure_finite(voltage, "wire voltage")?;
        }

        let lookup = |id: &str| {
            by_id
                .get(id)
                .copied()
                .ok_or_else(|| GraphError::UnknownComponent {
                    edge: wire.id.clone(),
                    component: id.to_string(),
                })
        };
        let source = lookup(&wire.source)?;
        let target = lookup(&wire.target)?;

        let source_side = infer_side(
            source,
            Some(target),
            wire.source_handle.as_deref(),
            WireEnd::Source,
        );
        let target_side = infer_side(
            target,
            Some(source),
            wire.target_handle.as_deref(),
            WireEnd::Target,
        );

        let mut edge = Edge::new(
            wire.id.clone(),
            PortRef::new(source.id.clone(), source_side),
            PortRef::new(target.id.clone(), target_side),
        );
        edge.voltage = resolve_edge_voltage(wire, source, target);
        edges.push(edge);
    }

    debug!(
        components = components.len(),
        edges = edges.len(),
        "normalized network"
    );

    Ok(Topology::new(components, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: &str, kind: ComponentKind, x: f64, y: f64) -> Component {
        Component::new(id, kind, OperatingData::default()).at(x, y)
    }

    #[test]
    fn handle_order_is_left_right_top_bottom() {
        assert_eq!(side_from_handle("left-target"), Some(Side::Left));
        assert_eq!(side_from_handle("bottom-right"), Some(Side::Right));
        assert_eq!(side_from_handle("top"), Some(Side::Top));
        assert_eq!(side_from_handle("a"), None);
    }

    #[test]
    fn tie_without_other_end_defaults_left() {
        let tie = Component::new(
            "t",
            ComponentKind::Switch,
            OperatingData::default().with_sub_type("tie"),
        );
        assert_eq!(infer_side(&tie, None, None, WireEnd::Source), Side::Left);
    }

    #[test]
    fn bus_uses_relative_position() {
        let bus = comp("b", ComponentKind::Bus, 10.0, 10.0);
        let at = |x, y| comp("o", ComponentKind::Load, x, y);
        assert_eq!(
            infer_side(&bus, Some(&at(0.0, 10.0)), None, WireEnd::Source),
            Side::Left
        );
        assert_eq!(
            infer_side(&bus, Some(&at(20.0, 0.0)), None, WireEnd::Source),
            Side::Right
        );
        assert_eq!(
            infer_side(&bus, Some(&at(10.0, 0.0)), None, WireEnd::Source),
            Side::Top
        );
        assert_eq!(
            infer_side(&bus, Some(&at(10.0, 10.0)), None, WireEnd::Source),
            Side::Bottom
        );
    }

    #[test]
    fn missing_type_is_bus() {
        let def = ComponentDef {
            id: "x".into(),
            kind: None,
            position: Default::default(),
            data: Default::default(),
        };
        assert_eq!(to_component(&def).unwrap().kind, ComponentKind::Bus);
    }
}
