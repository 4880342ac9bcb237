//! Display voltage resolution for wires.

use gf_components::{ComponentKind, TransformerRule};
use gf_core::{DEFAULT_VOLTAGE, Real, Side, in_volts};
use gf_graph::{Component, ConnectivityGraph, Edge};

/// Voltage shown on a wire.
///
/// In order: the voltage recorded at normalization; a transformer secondary
/// (bottom) end, scaled by the ratio; a transformer primary (top) end,
/// unscaled; a source end; otherwise 380 V. At each step the wire's source
/// end is checked before its target end.
pub fn edge_voltage(graph: &ConnectivityGraph, edge: &Edge) -> Real {
    if let Some(v) = edge.voltage {
        return v;
    }

    let ends: [(Option<&Component>, Side); 2] = [
        (graph.component(&edge.source.component), edge.source.side),
        (graph.component(&edge.target.component), edge.target.side),
    ];

    let transformer_at = |side: Side| {
        let mut at_side = ends.iter().filter(|(_, s)| *s == side);
        at_side.find_map(|(c, _)| c.filter(|c| c.kind == ComponentKind::Transformer))
    };

    if let Some(tx) = transformer_at(Side::Bottom) {
        return in_volts(TransformerRule::secondary_voltage(&tx.data));
    }
    if let Some(tx) = transformer_at(Side::Top) {
        return in_volts(TransformerRule::primary_voltage(&tx.data));
    }
    if let Some(source) = ends.iter().find_map(|(c, _)| c.filter(|c| c.is_source())) {
        return source.data.voltage.unwrap_or(DEFAULT_VOLTAGE);
    }

    DEFAULT_VOLTAGE
}
