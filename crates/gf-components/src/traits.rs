//! Core traits for component rules.

use crate::kind::OperatingData;
use gf_core::Side;

/// Energization of a component's four ports, as computed by the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PortEnergization {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl PortEnergization {
    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, energized: bool) {
        match side {
            Side::Top => self.top = energized,
            Side::Bottom => self.bottom = energized,
            Side::Left => self.left = energized,
            Side::Right => self.right = energized,
        }
    }

    /// Build from a per-side predicate.
    pub fn from_fn(mut f: impl FnMut(Side) -> bool) -> Self {
        let mut out = Self::default();
        for side in Side::ALL {
            out.set(side, f(side));
        }
        out
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Whether an internal link conducts both ways or only `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conduction {
    Bidirectional,
    Forward,
}

/// A port-to-port link inside one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalLink {
    pub from: Side,
    pub to: Side,
    pub conduction: Conduction,
}

impl InternalLink {
    pub const fn both(from: Side, to: Side) -> Self {
        Self {
            from,
            to,
            conduction: Conduction::Bidirectional,
        }
    }

    pub const fn forward(from: Side, to: Side) -> Self {
        Self {
            from,
            to,
            conduction: Conduction::Forward,
        }
    }
}

/// Static rules for one component type.
///
/// Rules are stateless; anything that depends on the component instance
/// (commanded status, sub-type) arrives through `OperatingData`.
pub trait ComponentRule: Send + Sync {
    /// Rule name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Sides legal for incoming user wiring.
    fn input_sides(&self) -> &'static [Side];

    /// Sides legal for outgoing user wiring.
    fn output_sides(&self) -> &'static [Side];

    /// Side that an incoming wire landing on `inferred` counts against for the
    /// at-most-one-feed constraint, or `None` when the component accepts any
    /// number of feeds there.
    fn multiplicity_side(&self, inferred: Side) -> Option<Side>;

    /// Whether the component receives current. Deliberately looser than
    /// "can conduct": an open switch touching a live port is still powered.
    fn compute_powered(&self, ports: &PortEnergization) -> bool;

    /// The component's own active state, independent of wiring where the
    /// type has a commanded status.
    fn compute_node_state(&self, ports: &PortEnergization, data: &OperatingData) -> bool;

    /// Port-to-port conduction inside the component for its current state.
    fn internal_links(&self, _data: &OperatingData) -> &'static [InternalLink] {
        &[]
    }

    fn is_input_side_allowed(&self, side: Side) -> bool {
        self.input_sides().contains(&side)
    }

    fn is_output_side_allowed(&self, side: Side) -> bool {
        self.output_sides().contains(&side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energization_from_fn() {
        let e = PortEnergization::from_fn(|s| matches!(s, Side::Left | Side::Bottom));
        assert!(!e.top);
        assert!(e.bottom);
        assert!(e.left);
        assert!(!e.right);
        assert!(e.any());
        assert!(!PortEnergization::default().any());
    }

    #[test]
    fn energization_get_set() {
        let mut e = PortEnergization::default();
        e.set(Side::Right, true);
        assert!(e.get(Side::Right));
        assert!(!e.get(Side::Top));
    }
}
