//! High-level solver interface.

use gf_components::PortEnergization;
use gf_core::Id;
use gf_graph::{ConnectivityGraph, Topology};
use tracing::debug;

use crate::error::SolverResult;
use crate::flow::flow_direction;
use crate::propagate::propagate;
use crate::solution::{EdgeState, GridSolution};
use crate::voltage::edge_voltage;

/// Solve one immutable graph.
///
/// 1. Propagates energy from every source's bottom port (BFS).
/// 2. Assembles each component's port energization and applies its rule
///    for powered / node state.
/// 3. Labels every wire with activity, flow direction and voltage.
///
/// Solving the same graph twice yields identical results.
pub fn solve(graph: &ConnectivityGraph) -> GridSolution {
    let distances = propagate(graph);
    let index = graph.index();

    debug!(
        sources = graph.source_ports().len(),
        energized_ports = distances.energized_count(),
        ports = graph.port_count(),
        "propagated energy"
    );

    let mut solution = GridSolution::default();

    for (i, component) in graph.components().iter().enumerate() {
        let comp = Id::from_index(i as u32);
        let status =
            PortEnergization::from_fn(|side| distances.is_energized(index.port_of(comp, side)));
        let rule = component.rule();
        solution
            .node_powered
            .insert(component.id.clone(), rule.compute_powered(&status));
        solution.node_state.insert(
            component.id.clone(),
            rule.compute_node_state(&status, &component.data),
        );
        solution.port_status.insert(component.id.clone(), status);
    }

    for (pos, edge) in graph.edges().iter().enumerate() {
        let Some((source, target)) = graph.edge_ports(pos) else {
            continue;
        };
        let source_dist = distances.get(source);
        let target_dist = distances.get(target);
        let flow = flow_direction(
            source_dist,
            target_dist,
            &edge.source.to_string(),
            &edge.target.to_string(),
        );
        solution.edge_states.insert(
            edge.id.clone(),
            EdgeState {
                active: source_dist.is_some() || target_dist.is_some(),
                flow,
                voltage: edge_voltage(graph, edge),
            },
        );
    }

    for (slot, d) in distances.iter() {
        let port = index.port_ref(Id::from_index(slot as u32));
        solution.distance.insert(port.to_string(), d);
    }

    solution
}

/// Build the graph for `topology` and solve it. Fails only on malformed
/// topology (dangling or duplicate references).
pub fn solve_topology(topology: Topology) -> SolverResult<GridSolution> {
    let graph = ConnectivityGraph::from_topology(topology)?;
    Ok(solve(&graph))
}
