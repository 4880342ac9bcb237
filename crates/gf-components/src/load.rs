//! Load rule.

use crate::kind::{OperatingData, Status};
use crate::traits::{ComponentRule, PortEnergization};
use gf_core::Side;

/// A load is a dead end fed through its top port.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadRule;

impl ComponentRule for LoadRule {
    fn name(&self) -> &'static str {
        "load"
    }

    fn input_sides(&self) -> &'static [Side] {
        &[Side::Top]
    }

    fn output_sides(&self) -> &'static [Side] {
        &[]
    }

    fn multiplicity_side(&self, _inferred: Side) -> Option<Side> {
        Some(Side::Top)
    }

    fn compute_powered(&self, ports: &PortEnergization) -> bool {
        ports.top
    }

    /// Running is a commanded state; it says nothing about supply.
    fn compute_node_state(&self, _ports: &PortEnergization, data: &OperatingData) -> bool {
        data.status_is(&Status::Running)
    }
}
