//! Energization solver for grid topologies.
//!
//! This crate runs a multi-source breadth-first search over a built
//! `ConnectivityGraph`, starting from the bottom port of every source. A port
//! reached by the search is energized; its first-seen distance orders the two
//! ends of each wire to label the flow direction. Component power and node
//! state come from the rule table, and wire voltages are resolved with
//! transformer scaling.
//!
//! The solve is a pure function of the graph: no retries, no partial results,
//! no I/O.

pub mod error;
pub mod flow;
pub mod propagate;
pub mod solution;
pub mod solve;
pub mod voltage;

pub use error::{SolverError, SolverResult};
pub use flow::flow_direction;
pub use propagate::{Distances, propagate};
pub use solution::{EdgeState, Flow, GridSolution, VoltageBand};
pub use solve::{solve, solve_topology};
pub use voltage::edge_voltage;
