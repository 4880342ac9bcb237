use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::error::GfError;

/// Compact arena index used inside a built connectivity graph.
///
/// - `u32` keeps adjacency lists small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Index of a component inside one built graph.
pub type CompIdx = Id;
/// Index of a port inside one built graph (`component * 4 + side`).
pub type PortIdx = Id;

/// One of the four cardinal faces of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides in port-slot order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Slot of this side within a component's port block.
    pub fn slot(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }

    pub fn from_slot(slot: usize) -> Option<Side> {
        Side::ALL.get(slot).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = GfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(GfError::UnknownSide {
                tag: other.to_string(),
            }),
        }
    }
}

/// Address of a port: `(component id, side)`, written `componentId:side`.
///
/// Ports carry no state of their own; energization lives in solver output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    pub component: String,
    pub side: Side,
}

impl PortRef {
    pub fn new(component: impl Into<String>, side: Side) -> Self {
        Self {
            component: component.into(),
            side,
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.side)
    }
}

impl FromStr for PortRef {
    type Err = GfError;

    /// Splits at the last `:` so component ids may themselves contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (component, side) = s
            .rsplit_once(':')
            .ok_or_else(|| GfError::MalformedPortId { id: s.to_string() })?;
        if component.is_empty() {
            return Err(GfError::MalformedPortId { id: s.to_string() });
        }
        Ok(Self {
            component: component.to_string(),
            side: side.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.slot(), i as usize);
        }
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn side_slots_are_stable() {
        for (i, side) in Side::ALL.iter().enumerate() {
            assert_eq!(side.slot(), i);
            assert_eq!(Side::from_slot(i), Some(*side));
        }
        assert_eq!(Side::from_slot(4), None);
    }

    #[test]
    fn port_ref_parses_last_colon() {
        let port: PortRef = "feeder:a:bottom".parse().unwrap();
        assert_eq!(port.component, "feeder:a");
        assert_eq!(port.side, Side::Bottom);
        assert_eq!(port.to_string(), "feeder:a:bottom");
    }

    #[test]
    fn port_ref_rejects_garbage() {
        assert!(matches!(
            "nocolon".parse::<PortRef>(),
            Err(GfError::MalformedPortId { .. })
        ));
        assert!(matches!(
            ":top".parse::<PortRef>(),
            Err(GfError::MalformedPortId { .. })
        ));
        assert!(matches!(
            "bus:north".parse::<PortRef>(),
            Err(GfError::UnknownSide { .. })
        ));
    }
}
