//! Edge policy for neighbor counting at the grid boundary.

/// How neighbor coordinates that fall off the grid edge are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Toroidal topology: coordinates wrap modulo the grid dimensions,
    /// so opposite edges are adjacent.
    #[default]
    Wraparound,
    /// Hard boundary: off-grid neighbors are counted as dead.
    Bounded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wraparound() {
        assert_eq!(EdgePolicy::default(), EdgePolicy::Wraparound);
    }
}
