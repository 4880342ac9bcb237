//! Solve results.

use std::collections::BTreeMap;

use gf_components::PortEnergization;
use gf_core::{PortRef, Real};
use serde::Serialize;

/// Reported direction of current on a wire, relative to its declared
/// source and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Forward,
    Reverse,
    None,
}

/// Coarse voltage class used to colour wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoltageBand {
    ExtraLow,
    Low,
    Medium,
    High,
    ExtraHigh,
}

impl VoltageBand {
    pub fn from_voltage(voltage: Real) -> Self {
        if voltage >= 1000.0 {
            VoltageBand::ExtraHigh
        } else if voltage >= 500.0 {
            VoltageBand::High
        } else if voltage >= 220.0 {
            VoltageBand::Medium
        } else if voltage >= 110.0 {
            VoltageBand::Low
        } else {
            VoltageBand::ExtraLow
        }
    }

    /// Display colour as `#rrggbb`.
    pub fn color_hex(self) -> &'static str {
        match self {
            VoltageBand::ExtraHigh => "#ef4444",
            VoltageBand::High => "#f97316",
            VoltageBand::Medium => "#eab308",
            VoltageBand::Low => "#22c55e",
            VoltageBand::ExtraLow => "#3b82f6",
        }
    }
}

/// Result for one wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeState {
    /// Either end is energized.
    pub active: bool,
    pub flow: Flow,
    /// Display voltage in volts.
    pub voltage: Real,
}

impl EdgeState {
    pub fn band(&self) -> VoltageBand {
        VoltageBand::from_voltage(self.voltage)
    }
}

/// Complete energization result for one graph.
///
/// Maps are keyed by component id, edge id, or `componentId:side` port id,
/// and iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSolution {
    pub node_powered: BTreeMap<String, bool>,
    pub node_state: BTreeMap<String, bool>,
    pub port_status: BTreeMap<String, PortEnergization>,
    pub edge_states: BTreeMap<String, EdgeState>,
    /// BFS distance of every energized port.
    pub distance: BTreeMap<String, u32>,
}

impl GridSolution {
    pub fn is_powered(&self, component: &str) -> bool {
        self.node_powered.get(component).copied().unwrap_or(false)
    }

    pub fn is_active(&self, component: &str) -> bool {
        self.node_state.get(component).copied().unwrap_or(false)
    }

    pub fn is_port_energized(&self, port: &PortRef) -> bool {
        self.port_status
            .get(&port.component)
            .is_some_and(|status| status.get(port.side))
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeState> {
        self.edge_states.get(id)
    }

    /// Ids of powered components, in id order.
    pub fn energized_components(&self) -> Vec<&str> {
        self.node_powered
            .iter()
            .filter(|&(_, &powered)| powered)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
