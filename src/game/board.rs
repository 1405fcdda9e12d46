use hashbrown::HashMap;

use crate::game::GameError;

/// Cells per row and rows per board.
pub const GRID_SIZE: u8 = 10;

/// Highest cell number; landing here exactly wins the game.
pub const LAST_CELL: u8 = 100;

/// The fixed snake/ladder table: `(entry, exit)` pairs. Ladders have
/// `exit > entry`, snakes the reverse. No entry is another entry's exit,
/// so a single resolution step never chains.
pub const JUMP_PAIRS: [(u8, u8); 15] = [
    (1, 38),
    (4, 14),
    (8, 30),
    (21, 42),
    (28, 76),
    (32, 10),
    (36, 6),
    (48, 26),
    (50, 67),
    (62, 18),
    (71, 92),
    (80, 99),
    (88, 24),
    (95, 56),
    (97, 78),
];

/// The fixed 100-cell board: serpentine cell numbering plus the
/// snake/ladder jump table. Immutable, shared read-only reference data.
#[derive(Debug, Clone)]
pub struct BoardTopology {
    jumps: HashMap<u8, u8>,
}

impl BoardTopology {
    pub fn standard() -> Self {
        BoardTopology {
            jumps: JUMP_PAIRS.iter().copied().collect(),
        }
    }

    /// Grid coordinates `(col, row)` of a cell, row 0 at the top.
    ///
    /// Cell 1 sits bottom-left and numbering snakes upward: each row
    /// reverses direction, so cell N and cell N+1 are always grid-adjacent.
    /// Row 0 holds 100 down to 91 left-to-right.
    pub fn coordinates_of(cell: u8) -> Result<(u8, u8), GameError> {
        if cell < 1 || cell > LAST_CELL {
            return Err(GameError::OutOfRange { cell });
        }
        let offset = LAST_CELL - cell;
        let row = offset / GRID_SIZE;
        let col = if row % 2 == 0 {
            offset % GRID_SIZE
        } else {
            GRID_SIZE - 1 - offset % GRID_SIZE
        };
        Ok((col, row))
    }

    /// Follows a snake or ladder if `cell` is an entry, else returns `cell`.
    pub fn resolve_jump(&self, cell: u8) -> u8 {
        self.jumps.get(&cell).copied().unwrap_or(cell)
    }

    pub fn is_entry(&self, cell: u8) -> bool {
        self.jumps.contains_key(&cell)
    }

    /// All `(entry, exit)` pairs with `exit > entry`.
    pub fn ladders(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.jumps.iter().filter(|(e, x)| x > e).map(|(&e, &x)| (e, x))
    }

    /// All `(entry, exit)` pairs with `exit < entry`.
    pub fn snakes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.jumps.iter().filter(|(e, x)| x < e).map(|(&e, &x)| (e, x))
    }
}

impl Default for BoardTopology {
    fn default() -> Self {
        Self::standard()
    }
}
