//! Bus-bar rule.

use crate::kind::OperatingData;
use crate::traits::{ComponentRule, InternalLink, PortEnergization};
use gf_core::Side;

const ALL_SIDES: &[Side] = &Side::ALL;

/// The six unordered side pairs; a bus conducts across all of them.
const MESH: &[InternalLink] = &[
    InternalLink::both(Side::Top, Side::Bottom),
    InternalLink::both(Side::Top, Side::Left),
    InternalLink::both(Side::Top, Side::Right),
    InternalLink::both(Side::Bottom, Side::Left),
    InternalLink::both(Side::Bottom, Side::Right),
    InternalLink::both(Side::Left, Side::Right),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BusRule;

impl ComponentRule for BusRule {
    fn name(&self) -> &'static str {
        "bus"
    }

    fn input_sides(&self) -> &'static [Side] {
        ALL_SIDES
    }

    fn output_sides(&self) -> &'static [Side] {
        ALL_SIDES
    }

    /// Buses merge any number of feeds.
    fn multiplicity_side(&self, _inferred: Side) -> Option<Side> {
        None
    }

    fn compute_powered(&self, ports: &PortEnergization) -> bool {
        ports.any()
    }

    fn compute_node_state(&self, ports: &PortEnergization, _data: &OperatingData) -> bool {
        self.compute_powered(ports)
    }

    fn internal_links(&self, _data: &OperatingData) -> &'static [InternalLink] {
        MESH
    }
}
