//! Transformer rule and voltage scaling.

use crate::kind::OperatingData;
use crate::traits::{ComponentRule, InternalLink, PortEnergization};
use gf_core::Side;
use gf_core::units::{DEFAULT_RATIO, DEFAULT_VOLTAGE, Voltage, volts};

/// Primary feeds secondary; there is no back-feed from bottom to top.
const PRIMARY_TO_SECONDARY: &[InternalLink] = &[InternalLink::forward(Side::Top, Side::Bottom)];

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformerRule;

impl TransformerRule {
    /// Voltage on the primary (top) side.
    pub fn primary_voltage(data: &OperatingData) -> Voltage {
        data.voltage().unwrap_or_else(|| volts(DEFAULT_VOLTAGE))
    }

    /// Voltage on the secondary (bottom) side: primary scaled by the ratio.
    pub fn secondary_voltage(data: &OperatingData) -> Voltage {
        Self::primary_voltage(data) * data.ratio.unwrap_or(DEFAULT_RATIO)
    }
}

impl ComponentRule for TransformerRule {
    fn name(&self) -> &'static str {
        "transformer"
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
        ports.top
    }

    fn compute_node_state(&self, ports: &PortEnergization, _data: &OperatingData) -> bool {
        self.compute_powered(ports)
    }

    fn internal_links(&self, _data: &OperatingData) -> &'static [InternalLink] {
        PRIMARY_TO_SECONDARY
    }
}
