//! Power source rule.

use crate::kind::OperatingData;
use crate::traits::{ComponentRule, PortEnergization};
use gf_core::Side;

/// A source only emits, from its bottom port, and is always live.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRule;

impl ComponentRule for SourceRule {
    fn name(&self) -> &'static str {
        "source"
    }

    fn input_sides(&self) -> &'static [Side] {
        &[]
    }

    fn output_sides(&self) -> &'static [Side] {
        &[Side::Bottom]
    }

    fn multiplicity_side(&self, _inferred: Side) -> Option<Side> {
        None
    }

    fn compute_powered(&self, _ports: &PortEnergization) -> bool {
        true
    }

    fn compute_node_state(&self, _ports: &PortEnergization, _data: &OperatingData) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_always_live() {
        let idle = PortEnergization::default();
        assert!(SourceRule.compute_powered(&idle));
        assert!(SourceRule.compute_node_state(&idle, &OperatingData::default()));
    }

    #[test]
    fn source_accepts_no_input() {
        for side in Side::ALL {
            assert!(!SourceRule.is_input_side_allowed(side));
        }
        assert!(SourceRule.is_output_side_allowed(Side::Bottom));
        assert!(!SourceRule.is_output_side_allowed(Side::Top));
        let data = OperatingData::default();
        assert!(SourceRule.internal_links(&data).is_empty());
    }
}
