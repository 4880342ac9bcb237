//! gf-components: per-type rule table for grid components.
//!
//! Every component type answers the same questions through the
//! `ComponentRule` trait:
//! - which sides are legal for incoming and outgoing wiring
//! - which side counts toward the single-feed constraint
//! - whether the component is powered, given its port energization
//! - whether the component's own commanded state is active
//! - which of its ports conduct into each other
//!
//! `ComponentKind::rule` picks the rule for a component, including the
//! tie-switch override for switches whose sub-type is `tie`.
//!
//! # Example
//!
//! ```
//! use gf_components::{ComponentKind, OperatingData, PortEnergization, Status};
//! use gf_core::Side;
//!
//! let data = OperatingData::default().with_status(Status::Running);
//! let rule = ComponentKind::Load.rule(&data);
//!
//! let idle = PortEnergization::default();
//! assert!(!rule.compute_powered(&idle));
//! assert!(rule.compute_node_state(&idle, &data));
//! assert_eq!(rule.input_sides(), &[Side::Top]);
//! ```

pub mod bus;
pub mod error;
pub mod kind;
pub mod load;
pub mod source;
pub mod switch;
pub mod traits;
pub mod transformer;

// Re-exports
pub use bus::BusRule;
pub use error::ComponentError;
pub use kind::{ComponentKind, OperatingData, Status, TIE_SUB_TYPE};
pub use load::LoadRule;
pub use source::SourceRule;
pub use switch::{SwitchRule, TieSwitchRule};
pub use traits::{ComponentRule, Conduction, InternalLink, PortEnergization};
pub use transformer::TransformerRule;
