//! Static world geometry served through [`summon_core::MapOracle`].
use summon_content::Obstacle;
use summon_core::{MapOracle, Position};

/// MapOracle implementation with static obstacle data
///
/// Line of sight is blocked when the straight segment between two points
/// touches any obstacle box on their map. Points on different maps never see
/// each other.
#[derive(Debug, Default)]
pub struct MapOracleImpl {
    obstacles: Vec<Obstacle>,
}

impl MapOracleImpl {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// A map with nothing in the way.
    pub fn open() -> Self {
        Self::default()
    }
}

impl MapOracle for MapOracleImpl {
    fn is_within_los(&self, from: &Position, to: &Position) -> bool {
        if from.map != to.map {
            return false;
        }
        !self
            .obstacles
            .iter()
            .filter(|obstacle| obstacle.map == from.map)
            .any(|obstacle| segment_hits_box(from, to, obstacle))
    }
}

/// Slab test of the segment `from -> to` against an axis-aligned box.
fn segment_hits_box(from: &Position, to: &Position, obstacle: &Obstacle) -> bool {
    let start = [from.x, from.y, from.z];
    let end = [to.x, to.y, to.z];
    let (mut t_enter, mut t_exit) = (0.0_f32, 1.0_f32);

    for axis in 0..3 {
        let delta = end[axis] - start[axis];
        let (lo, hi) = (obstacle.min[axis], obstacle.max[axis]);

        if delta.abs() <= f32::EPSILON {
            if start[axis] < lo || start[axis] > hi {
                return false;
            }
            continue;
        }

        let mut t0 = (lo - start[axis]) / delta;
        let mut t1 = (hi - start[axis]) / delta;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use summon_core::MapId;

    fn at(x: f32, y: f32) -> Position {
        Position::new(MapId(0), x, y, 5.0)
    }

    fn wall() -> MapOracleImpl {
        MapOracleImpl::new(vec![Obstacle::new(
            MapId(0),
            [4.0, -10.0, 0.0],
            [5.0, 10.0, 20.0],
        )])
    }

    #[test]
    fn wall_blocks_segments_that_cross_it() {
        assert!(!wall().is_within_los(&at(0.0, 0.0), &at(10.0, 0.0)));
        assert!(!wall().is_within_los(&at(0.0, 0.0), &at(4.5, 3.0)));
    }

    #[test]
    fn segments_beside_or_short_of_the_wall_are_clear() {
        assert!(wall().is_within_los(&at(0.0, 0.0), &at(3.9, 0.0)));
        assert!(wall().is_within_los(&at(0.0, 0.0), &at(0.0, 8.0)));
        assert!(wall().is_within_los(&at(0.0, 15.0), &at(10.0, 15.0)));
    }

    #[test]
    fn other_maps_are_never_visible() {
        let there = Position::new(MapId(1), 0.0, 0.0, 5.0);
        assert!(!MapOracleImpl::open().is_within_los(&at(0.0, 0.0), &there));
    }

    #[test]
    fn obstacles_only_block_their_own_map() {
        let map = MapOracleImpl::new(vec![Obstacle::new(
            MapId(1),
            [-1.0, -1.0, 0.0],
            [1.0, 1.0, 10.0],
        )]);
        assert!(map.is_within_los(&at(-5.0, 0.0), &at(5.0, 0.0)));
    }
}
