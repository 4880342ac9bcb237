//! Flow-direction labelling for wires.

use std::cmp::Ordering;

use crate::solution::Flow;

/// Direction of flow on a wire from the BFS distances of its ends.
///
/// The end closer to a source is upstream. With only one end energized,
/// flow leaves that end. Equal distances (symmetric paths, e.g. two sources
/// meeting on a bus) are broken by comparing the two port ids: `Forward`
/// iff the source-side id sorts lower.
pub fn flow_direction(
    source: Option<u32>,
    target: Option<u32>,
    source_id: &str,
    target_id: &str,
) -> Flow {
    match (source, target) {
        (None, None) => Flow::None,
        (Some(_), None) => Flow::Forward,
        (None, Some(_)) => Flow::Reverse,
        (Some(s), Some(t)) => match s.cmp(&t) {
            Ordering::Less => Flow::Forward,
            Ordering::Greater => Flow::Reverse,
            Ordering::Equal if source_id < target_id => Flow::Forward,
            Ordering::Equal => Flow::Reverse,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_wire_has_no_flow() {
        assert_eq!(flow_direction(None, None, "a:bottom", "b:top"), Flow::None);
    }

    #[test]
    fn single_live_end_decides() {
        assert_eq!(
            flow_direction(Some(7), None, "z:top", "a:top"),
            Flow::Forward
        );
        assert_eq!(
            flow_direction(None, Some(0), "a:top", "z:top"),
            Flow::Reverse
        );
    }

    #[test]
    fn nearer_end_is_upstream() {
        assert_eq!(flow_direction(Some(1), Some(2), "z", "a"), Flow::Forward);
        assert_eq!(flow_direction(Some(3), Some(2), "a", "z"), Flow::Reverse);
    }

    #[test]
    fn ties_break_on_port_id() {
        assert_eq!(
            flow_direction(Some(2), Some(2), "bus1:right", "bus2:left"),
            Flow::Forward
        );
        assert_eq!(
            flow_direction(Some(2), Some(2), "bus2:left", "bus1:right"),
            Flow::Reverse
        );
    }
}
