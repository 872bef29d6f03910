//! Room data model shared by the codec, generator, and simulation.
//!
//! A [`Room`] is immutable once built: the codec and the procedural
//! generator are its only constructors, and both guarantee the spawn/goal
//! invariant. The simulation clones a room into a working grid at load time
//! and never writes back.

pub mod codec;
pub mod generate;

pub use codec::{LevelFormatError, MAP_MARKER, ROOM_SEPARATOR, encode_levels, parse_levels};
pub use generate::{Mulberry32, generate_procedural};

use serde::{Deserialize, Serialize};

/// One grid cell symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Wall; the only tile that blocks movement
    Solid,
    Empty,
    /// Spawn marker; positional metadata, non-solid in play
    Spawn,
    /// Goal marker; positional metadata, non-solid in play
    Goal,
    /// Always-lethal spike
    Spike,
    /// Spike that is lethal only while armed
    BlinkSpike,
    /// Marker a room load converts into a live beam
    BeamSeed,
    /// Any unrecognized character; non-solid, non-interactive, preserved
    /// so encoding reproduces the source text
    Other(char),
}

impl Tile {
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => Tile::Solid,
            '.' => Tile::Empty,
            'S' => Tile::Spawn,
            'G' => Tile::Goal,
            '^' => Tile::Spike,
            '~' => Tile::BlinkSpike,
            '*' => Tile::BeamSeed,
            other => Tile::Other(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Tile::Solid => '#',
            Tile::Empty => '.',
            Tile::Spawn => 'S',
            Tile::Goal => 'G',
            Tile::Spike => '^',
            Tile::BlinkSpike => '~',
            Tile::BeamSeed => '*',
            Tile::Other(c) => c,
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Solid)
    }
}

/// An immutable-after-load room description.
///
/// Invariant: contains at least one spawn and one goal marker (the codec
/// rejects rooms without them; the generator force-places both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Length of the first grid row; other rows are not validated against it
    pub width: usize,
    pub height: usize,
    /// Row-major grid, one `Vec<Tile>` per text line
    pub rows: Vec<Vec<Tile>>,
    pub spawn: (usize, usize),
    pub goal: (usize, usize),
}

impl Room {
    /// Tile lookup. Coordinates outside the grid - negative, past the last
    /// row, or past the end of a short row - read as `Empty`. Collision and
    /// hazard checks rely on this instead of bounds errors.
    pub fn tile_at(&self, tx: i32, ty: i32) -> Tile {
        if tx < 0 || ty < 0 {
            return Tile::Empty;
        }
        self.rows
            .get(ty as usize)
            .and_then(|row| row.get(tx as usize))
            .copied()
            .unwrap_or(Tile::Empty)
    }

    /// Whether the cell blocks movement; out-of-range is non-solid.
    pub fn solid_at(&self, tx: i32, ty: i32) -> bool {
        self.tile_at(tx, ty).is_solid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_chars_round_trip() {
        for c in ['#', '.', 'S', 'G', '^', '~', '*', '?', ' ', 'x'] {
            assert_eq!(Tile::from_char(c).as_char(), c);
        }
        assert_eq!(Tile::from_char('!'), Tile::Other('!'));
        assert!(!Tile::Other('!').is_solid());
    }

    #[test]
    fn test_out_of_range_lookups_read_empty() {
        let room = Room {
            name: "lookup".into(),
            width: 3,
            height: 2,
            rows: vec![
                vec![Tile::Solid, Tile::Spawn, Tile::Goal],
                vec![Tile::Solid], // short row: columns 1 and 2 do not exist
            ],
            spawn: (1, 0),
            goal: (2, 0),
        };
        assert_eq!(room.tile_at(-1, 0), Tile::Empty);
        assert_eq!(room.tile_at(0, -1), Tile::Empty);
        assert_eq!(room.tile_at(0, 5), Tile::Empty);
        assert_eq!(room.tile_at(2, 1), Tile::Empty);
        assert!(room.solid_at(0, 1));
        assert!(!room.solid_at(1, 1));
    }

    #[test]
    fn test_room_serde_round_trip() {
        let room = crate::level::generate_procedural(7, 1).remove(0);
        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(room, back);
    }
}
