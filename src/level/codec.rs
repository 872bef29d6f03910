//! Text format parser/encoder for room sets.
//!
//! A document is one or more room chunks separated by a line whose trimmed
//! content is `---`. Each chunk carries an optional `name=<free text>` line,
//! a required line whose trimmed content is `map`, then every following
//! non-blank line as a grid row, one character per tile.
//!
//! Parsing is all-or-nothing: the first malformed chunk aborts the call and
//! no partial room list is returned.

use thiserror::Error;

use super::{Room, Tile};

/// Line separating room chunks (matched after trimming).
pub const ROOM_SEPARATOR: &str = "---";
/// Line introducing a chunk's grid rows (matched after trimming).
pub const MAP_MARKER: &str = "map";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelFormatError {
    /// A chunk had no `map` line; `index` is the 1-based room position.
    #[error("room {index}: missing map section")]
    MissingMapSection { index: usize },
    /// A chunk's grid never declared a spawn or a goal tile.
    #[error("room {index}: missing spawn or goal")]
    MissingSpawnOrGoal { index: usize },
}

/// Parse a level document into rooms, in order of appearance.
pub fn parse_levels(text: &str) -> Result<Vec<Room>, LevelFormatError> {
    let mut rooms = Vec::new();
    let mut index = 0;
    for chunk in split_chunks(text) {
        if chunk.iter().all(|line| line.trim().is_empty()) {
            continue;
        }
        index += 1;
        rooms.push(parse_room(&chunk, index)?);
    }
    Ok(rooms)
}

/// Encode rooms back into the text format. Re-parsing the output yields an
/// equivalent grid for every room; a name that was defaulted at parse time
/// is written out literally, not omitted.
pub fn encode_levels(rooms: &[Room]) -> String {
    let mut out = String::new();
    for (i, room) in rooms.iter().enumerate() {
        if i > 0 {
            out.push_str(ROOM_SEPARATOR);
            out.push('\n');
        }
        out.push_str("name=");
        out.push_str(&room.name);
        out.push('\n');
        out.push_str(MAP_MARKER);
        out.push('\n');
        for row in &room.rows {
            out.extend(row.iter().map(|tile| tile.as_char()));
            out.push('\n');
        }
    }
    out
}

fn split_chunks(text: &str) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim() == ROOM_SEPARATOR {
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    chunks.push(current);
    chunks
}

fn parse_room(lines: &[&str], index: usize) -> Result<Room, LevelFormatError> {
    let mut name = None;
    let mut rows_start = None;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if name.is_none()
            && let Some(value) = trimmed.strip_prefix("name=")
        {
            name = Some(value.to_string());
        }
        if trimmed == MAP_MARKER {
            rows_start = Some(i + 1);
            break;
        }
    }
    let Some(rows_start) = rows_start else {
        return Err(LevelFormatError::MissingMapSection { index });
    };

    // Grid rows are taken verbatim: no trimming, so indentation becomes
    // `Other(' ')` cells and row lengths may differ.
    let rows: Vec<Vec<Tile>> = lines[rows_start..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().map(Tile::from_char).collect())
        .collect();

    let width = rows.first().map_or(0, Vec::len);
    let height = rows.len();

    let mut spawn = None;
    let mut goal = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            match tile {
                Tile::Spawn => spawn = Some((x, y)), // last one wins
                Tile::Goal => goal = Some((x, y)),
                _ => {}
            }
        }
    }
    let (Some(spawn), Some(goal)) = (spawn, goal) else {
        return Err(LevelFormatError::MissingSpawnOrGoal { index });
    };

    Ok(Room {
        name: name.unwrap_or_else(|| format!("Room {index}")),
        width,
        height,
        rows,
        spawn,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const TWO_ROOMS: &str = "\
name=First
map
#####
#S.G#
#####
---
map
#######
#S..^G#
#######
";

    #[test]
    fn test_parse_two_rooms() {
        let rooms = parse_levels(TWO_ROOMS).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "First");
        assert_eq!(rooms[0].width, 5);
        assert_eq!(rooms[0].height, 3);
        assert_eq!(rooms[0].spawn, (1, 1));
        assert_eq!(rooms[0].goal, (3, 1));
        // second room has no name line and defaults to its 1-based index
        assert_eq!(rooms[1].name, "Room 2");
        assert_eq!(rooms[1].rows[1][4], Tile::Spike);
    }

    #[test]
    fn test_separator_tolerates_surrounding_whitespace() {
        let text = "map\nSG\n\n  ---  \n\nmap\nGS\n";
        let rooms = parse_levels(text).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].spawn, (0, 0));
        assert_eq!(rooms[1].spawn, (1, 0));
    }

    #[test]
    fn test_missing_map_marker_aborts_whole_parse() {
        let text = "name=ok\nmap\nSG\n---\nname=broken\nSG\n";
        let err = parse_levels(text).unwrap_err();
        assert_eq!(err, LevelFormatError::MissingMapSection { index: 2 });
    }

    #[test]
    fn test_missing_spawn_or_goal_fails() {
        let err = parse_levels("map\n###\n#G#\n###\n").unwrap_err();
        assert_eq!(err, LevelFormatError::MissingSpawnOrGoal { index: 1 });
        let err = parse_levels("map\nS..\n").unwrap_err();
        assert_eq!(err, LevelFormatError::MissingSpawnOrGoal { index: 1 });
    }

    #[test]
    fn test_duplicate_markers_last_wins() {
        let rooms = parse_levels("map\nS.S\nG.G\n").unwrap();
        assert_eq!(rooms[0].spawn, (2, 0));
        assert_eq!(rooms[0].goal, (2, 1));
    }

    #[test]
    fn test_blank_lines_between_rows_are_skipped() {
        let rooms = parse_levels("map\n#S#\n\n#G#\n").unwrap();
        assert_eq!(rooms[0].height, 2);
        assert_eq!(rooms[0].goal, (1, 1));
    }

    #[test]
    fn test_unknown_characters_survive_round_trip() {
        let rooms = parse_levels("name=odd\nmap\nS?G\nq #\n").unwrap();
        assert_eq!(rooms[0].rows[0][1], Tile::Other('?'));
        let reparsed = parse_levels(&encode_levels(&rooms)).unwrap();
        assert_eq!(reparsed, rooms);
    }

    #[test]
    fn test_encode_then_parse_reproduces_grid() {
        let rooms = parse_levels(TWO_ROOMS).unwrap();
        let reparsed = parse_levels(&encode_levels(&rooms)).unwrap();
        assert_eq!(reparsed.len(), rooms.len());
        for (a, b) in rooms.iter().zip(&reparsed) {
            assert_eq!(a.rows, b.rows);
            assert_eq!(a.width, b.width);
            assert_eq!(a.height, b.height);
            assert_eq!(a.spawn, b.spawn);
            assert_eq!(a.goal, b.goal);
        }
        // the defaulted name is now a literal name line
        assert_eq!(reparsed[1].name, "Room 2");
    }

    proptest! {
        #[test]
        fn prop_generated_rooms_round_trip(seed in any::<u32>(), count in 1_usize..5) {
            let rooms = crate::level::generate_procedural(seed, count);
            let reparsed = parse_levels(&encode_levels(&rooms)).unwrap();
            prop_assert_eq!(rooms, reparsed);
        }
    }
}
