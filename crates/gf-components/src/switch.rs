//! Breaker and tie-switch rules.

use crate::kind::{OperatingData, Status};
use crate::traits::{ComponentRule, InternalLink, PortEnergization};
use gf_core::Side;

const VERTICAL: &[InternalLink] = &[InternalLink::both(Side::Top, Side::Bottom)];
const HORIZONTAL: &[InternalLink] = &[InternalLink::both(Side::Left, Side::Right)];

/// Plain breaker: fed at the top, feeds out of the bottom, conducts only
/// when commanded `on`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchRule;

impl ComponentRule for SwitchRule {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn input_sides(&self) -> &'static [Side] {
        &[Side::Top]
    }

    fn output_sides(&self) -> &'static [Side] {
        &[Side::Bottom]
    }

    fn multiplicity_side(&self, _inferred: Side) -> Option<Side> {
        Some(Side::Top)
    }

    fn compute_powered(&self, ports: &PortEnergization) -> bool {
        ports.any()
    }

    fn compute_node_state(&self, _ports: &PortEnergization, data: &OperatingData) -> bool {
        data.status_is(&Status::On)
    }

    fn internal_links(&self, data: &OperatingData) -> &'static [InternalLink] {
        if data.status_is(&Status::On) {
            VERTICAL
        } else {
            &[]
        }
    }
}

/// Bidirectional tie switch bridging two bus sections through its left and
/// right ports. Replaces the breaker rule entirely, node state included.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieSwitchRule;

impl ComponentRule for TieSwitchRule {
    fn name(&self) -> &'static str {
        "tie switch"
    }

    fn input_sides(&self) -> &'static [Side] {
        &[Side::Left, Side::Right]
    }

    fn output_sides(&self) -> &'static [Side] {
        &[Side::Left, Side::Right]
    }

    /// A tie exists to merge two paths, so neither side is limited.
    fn multiplicity_side(&self, _inferred: Side) -> Option<Side> {
        None
    }

    fn compute_powered(&self, ports: &PortEnergization) -> bool {
        ports.any()
    }

    fn compute_node_state(&self, _ports: &PortEnergization, data: &OperatingData) -> bool {
        data.status_is(&Status::On)
    }

    fn internal_links(&self, data: &OperatingData) -> &'static [InternalLink] {
        if data.status_is(&Status::On) {
            HORIZONTAL
        } else {
            &[]
        }
    }
}
