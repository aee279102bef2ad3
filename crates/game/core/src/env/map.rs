use crate::state::Position;

/// Static map oracle answering visibility questions about the host geometry.
pub trait MapOracle: Send + Sync {
    /// Returns true when nothing blocks the straight line between `from` and `to`.
    ///
    /// Points on different maps are never in line of sight.
    fn is_within_los(&self, from: &Position, to: &Position) -> bool;
}
