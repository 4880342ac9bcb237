//! Component types and their caller-supplied operating data.

use core::fmt;
use core::str::FromStr;

use crate::bus::BusRule;
use crate::error::ComponentError;
use crate::load::LoadRule;
use crate::source::SourceRule;
use crate::switch::{SwitchRule, TieSwitchRule};
use crate::traits::ComponentRule;
use crate::transformer::TransformerRule;
use gf_core::units::{Real, Voltage, volts};

/// Sub-type marking a switch as a bidirectional tie switch.
pub const TIE_SUB_TYPE: &str = "tie";

/// The closed set of component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Source,
    Switch,
    Bus,
    Load,
    Transformer,
}

impl ComponentKind {
    /// Rule governing a component of this kind with the given data.
    ///
    /// A switch whose sub-type is `tie` gets the tie-switch rule, which
    /// overrides the plain switch rule wholesale.
    pub fn rule(self, data: &OperatingData) -> &'static dyn ComponentRule {
        match self {
            ComponentKind::Source => &SourceRule,
            ComponentKind::Switch if data.is_tie() => &TieSwitchRule,
            ComponentKind::Switch => &SwitchRule,
            ComponentKind::Bus => &BusRule,
            ComponentKind::Load => &LoadRule,
            ComponentKind::Transformer => &TransformerRule,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Source => "powerSource",
            ComponentKind::Switch => "switch",
            ComponentKind::Bus => "bus",
            ComponentKind::Load => "load",
            ComponentKind::Transformer => "transformer",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "powerSource" | "source" => Ok(ComponentKind::Source),
            "switch" => Ok(ComponentKind::Switch),
            "bus" => Ok(ComponentKind::Bus),
            "load" => Ok(ComponentKind::Load),
            "transformer" => Ok(ComponentKind::Transformer),
            other => Err(ComponentError::UnknownType {
                name: other.to_string(),
            }),
        }
    }
}

/// Commanded status of a component.
///
/// Switches use `on`/`off`, loads use `running`/`stopped`; any other label
/// is kept verbatim and never counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    On,
    Off,
    Running,
    Stopped,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::On => "on",
            Status::Off => "off",
            Status::Running => "running",
            Status::Stopped => "stopped",
            Status::Other(label) => label,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "on" => Status::On,
            "off" => Status::Off,
            "running" => Status::Running,
            "stopped" => Status::Stopped,
            other => Status::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific operating fields supplied by the caller for one solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatingData {
    pub status: Option<Status>,
    pub sub_type: Option<String>,
    /// Configured voltage in volts.
    pub voltage: Option<Real>,
    /// Transformer secondary/primary ratio.
    pub ratio: Option<Real>,
    /// Transformer capacity (kVA).
    pub capacity: Option<Real>,
    /// Rated current in amperes.
    pub rated_current: Option<Real>,
}

impl OperatingData {
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    pub fn with_voltage(mut self, voltage: Real) -> Self {
        self.voltage = Some(voltage);
        self
    }

    pub fn with_ratio(mut self, ratio: Real) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn is_tie(&self) -> bool {
        self.sub_type.as_deref() == Some(TIE_SUB_TYPE)
    }

    pub fn status_is(&self, status: &Status) -> bool {
        self.status.as_ref() == Some(status)
    }

    pub fn voltage(&self) -> Option<Voltage> {
        self.voltage.map(volts)
    }
}
