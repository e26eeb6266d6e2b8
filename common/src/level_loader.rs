use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::engine::{Level, Point};
use crate::log;

pub const LEVEL_FILE_EXTENSION: &str = "txt";

const WALL_MARKER: char = '#';
const PLAYER_ONE_MARKER: char = '1';
const PLAYER_TWO_MARKER: char = '2';

#[derive(Debug)]
pub enum LevelError {
    Io(io::Error),
    EmptyMap,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    MissingStart {
        marker: char,
    },
    DuplicateStart {
        marker: char,
    },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::EmptyMap => write!(f, "Level map has no rows"),
            LevelError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} cells, expected {}",
                    row, found, expected
                )
            }
            LevelError::MissingStart { marker } => {
                write!(f, "Level map has no '{}' start marker", marker)
            }
            LevelError::DuplicateStart { marker } => {
                write!(f, "Level map has more than one '{}' start marker", marker)
            }
        }
    }
}

impl std::error::Error for LevelError {}

impl From<io::Error> for LevelError {
    fn from(e: io::Error) -> Self {
        LevelError::Io(e)
    }
}

/// Reads a level from a text file: `#` is a wall, `1` and `2` mark the start
/// cells (empty underneath), everything else is open floor. The display name
/// is derived from the file name.
pub fn load_level(path: &Path) -> Result<Level, LevelError> {
    let content = std::fs::read_to_string(path)?;
    parse_level(&content, level_name_from_path(path))
}

pub fn parse_level(content: &str, name: String) -> Result<Level, LevelError> {
    let rows: Vec<&str> = content.lines().collect();
    if rows.is_empty() || rows[0].is_empty() {
        return Err(LevelError::EmptyMap);
    }

    let width = rows[0].chars().count();
    let mut walls = HashSet::new();
    let mut one_start: Option<Point> = None;
    let mut two_start: Option<Point> = None;

    for (y, row) in rows.iter().enumerate() {
        let row_width = row.chars().count();
        if row_width != width {
            return Err(LevelError::RaggedRow {
                row: y,
                expected: width,
                found: row_width,
            });
        }

        for (x, cell) in row.chars().enumerate() {
            let point = Point::new(x as i32, y as i32);
            match cell {
                WALL_MARKER => {
                    walls.insert(point);
                }
                PLAYER_ONE_MARKER => {
                    if one_start.replace(point).is_some() {
                        return Err(LevelError::DuplicateStart {
                            marker: PLAYER_ONE_MARKER,
                        });
                    }
                }
                PLAYER_TWO_MARKER => {
                    if two_start.replace(point).is_some() {
                        return Err(LevelError::DuplicateStart {
                            marker: PLAYER_TWO_MARKER,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    let one_start = one_start.ok_or(LevelError::MissingStart {
        marker: PLAYER_ONE_MARKER,
    })?;
    let two_start = two_start.ok_or(LevelError::MissingStart {
        marker: PLAYER_TWO_MARKER,
    })?;

    Ok(Level::new(
        width as i32,
        rows.len() as i32,
        walls,
        one_start,
        two_start,
        name,
    ))
}

/// Level files in `dir` with the level extension, sorted by file name so the
/// selection combo is stable across runs. A missing or unreadable directory
/// yields an empty list.
pub fn list_levels(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log!("Failed to read level directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut levels: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(LEVEL_FILE_EXTENSION))
        })
        .collect();
    levels.sort();
    levels
}

/// "levels/neon_maze.txt" -> "Neon Maze".
pub fn level_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Unnamed");

    stem.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlayerSlot;

    #[test]
    fn test_parse_well_formed_map() {
        let map = "\
#####
#1 2#
#   #
#####";
        let level = parse_level(map, "Box".to_string()).unwrap();
        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 4);
        assert_eq!(level.start_position(PlayerSlot::One), Point::new(1, 1));
        assert_eq!(level.start_position(PlayerSlot::Two), Point::new(3, 1));
        assert_eq!(level.name(), "Box");
        // Start markers are floor, not walls.
        assert!(!level.is_wall(1, 1));
        assert!(!level.is_wall(3, 1));
        assert!(level.is_wall(0, 0));
        assert!(level.is_wall(2, 3));
        assert!(!level.is_wall(2, 2));
    }

    #[test]
    fn test_wall_cells_match_markers() {
        let map = "\
# #
1 2";
        let level = parse_level(map, "Tiny".to_string()).unwrap();
        let walls: std::collections::HashSet<Point> = level.wall_cells().collect();
        assert_eq!(
            walls,
            [Point::new(0, 0), Point::new(2, 0)].into_iter().collect()
        );
    }

    #[test]
    fn test_empty_map_is_rejected() {
        assert!(matches!(
            parse_level("", "X".to_string()),
            Err(LevelError::EmptyMap)
        ));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let map = "\
####
1  2
###";
        assert!(matches!(
            parse_level(map, "X".to_string()),
            Err(LevelError::RaggedRow {
                row: 2,
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let map = "\
###
1 #";
        assert!(matches!(
            parse_level(map, "X".to_string()),
            Err(LevelError::MissingStart { marker: '2' })
        ));
    }

    #[test]
    fn test_duplicate_start_is_rejected() {
        let map = "\
1 2
1  ";
        assert!(matches!(
            parse_level(map, "X".to_string()),
            Err(LevelError::DuplicateStart { marker: '1' })
        ));
    }

    #[test]
    fn test_level_name_from_path() {
        assert_eq!(
            level_name_from_path(Path::new("levels/classic_arena.txt")),
            "Classic Arena"
        );
        assert_eq!(
            level_name_from_path(Path::new("the-grid.txt")),
            "The Grid"
        );
        assert_eq!(level_name_from_path(Path::new("open.txt")), "Open");
    }
}
