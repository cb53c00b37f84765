/// Cell represents the fundamental unit in Conway's Game of Life.
/// Stored as a single byte (`Dead = 0`, `Alive = 1`) so a grid's cell
/// buffer can be handed to a renderer as-is, one slot per cell.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_state(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.next_state(0), Cell::Dead);
        assert_eq!(Cell::Alive.next_state(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.next_state(2), Cell::Alive);
        assert_eq!(Cell::Alive.next_state(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.next_state(4), Cell::Dead);
        assert_eq!(Cell::Alive.next_state(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.next_state(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead() {
        assert_eq!(Cell::Dead.next_state(0), Cell::Dead);
        assert_eq!(Cell::Dead.next_state(2), Cell::Dead);
        assert_eq!(Cell::Dead.next_state(4), Cell::Dead);
    }

    #[test]
    fn test_byte_layout() {
        // The renderer indexes the buffer as raw state values.
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }
}
