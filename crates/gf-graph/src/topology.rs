//! Normalized topology records.
//!
//! These are the solver's input: every edge endpoint is already resolved to
//! a concrete `componentId:side`, and every component carries the
//! operating data supplied for this solve.

use gf_components::{ComponentKind, ComponentRule, OperatingData};
use gf_core::{PortRef, Real};

/// Canvas position of a component. Only side inference looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: Real,
    pub y: Real,
}

impl Position {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// A typed component. It owns four ports implicitly, one per side.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    pub kind: ComponentKind,
    pub data: OperatingData,
    pub position: Option<Position>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: ComponentKind, data: OperatingData) -> Self {
        Self {
            id: id.into(),
            kind,
            data,
            position: None,
        }
    }

    pub fn at(mut self, x: Real, y: Real) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    /// Rule for this component, tie override included.
    pub fn rule(&self) -> &'static dyn ComponentRule {
        self.kind.rule(&self.data)
    }

    pub fn is_source(&self) -> bool {
        self.kind == ComponentKind::Source
    }
}

/// A wire between two ports.
///
/// Source/target only matter for the reported flow label; wires conduct
/// both ways.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: PortRef,
    pub target: PortRef,
    /// Voltage resolved at normalization, if any.
    pub voltage: Option<Real>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: PortRef, target: PortRef) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            voltage: None,
        }
    }

    pub fn with_voltage(mut self, voltage: Real) -> Self {
        self.voltage = Some(voltage);
        self
    }
}

/// Components plus wiring for one solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    pub components: Vec<Component>,
    pub edges: Vec<Edge>,
}

impl Topology {
    pub fn new(components: Vec<Component>, edges: Vec<Edge>) -> Self {
        Self { components, edges }
    }

    pub fn sources(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_source())
    }
}
