//! File I/O for board patterns and board descriptions

use super::{BoardDescription, Coordinate, LiveCells};
use crate::error::InputError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file.
/// Format: each line is a row (`y`), each character a column (`x`),
/// '1' for alive cells and '0' for dead cells
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<BoardDescription> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern_from_string(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern; the board takes the pattern's dimensions
pub fn parse_pattern_from_string(content: &str) -> Result<BoardDescription, InputError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(InputError::EmptyPattern);
    }

    let height = lines.len();
    let width = lines[0].chars().count();
    let mut live_cells = LiveCells::new();

    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(InputError::RaggedRow { row, len, expected: width });
        }

        for (col, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    live_cells.insert(Coordinate::new(col as i64, row as i64));
                }
                _ => return Err(InputError::InvalidCharacter { ch, row, col }),
            }
        }
    }

    Ok(BoardDescription { width, height, live_cells })
}

/// Load a JSON board description (`width`, `height`, `live_cells`)
pub fn load_description_from_json<P: AsRef<Path>>(path: P) -> Result<BoardDescription> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse board description: {}", path.as_ref().display()))
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "01000\n00100\n11100\n00000\n00000\n"),
        ("blinker.txt", "010\n010\n010\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "1100\n1100\n0011\n0011\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern_from_string() {
        let description = parse_pattern_from_string("010\n101\n010\n").unwrap();

        assert_eq!(description.width, 3);
        assert_eq!(description.height, 3);
        assert_eq!(description.live_cells, LiveCells::from_pairs(&[(1, 0), (0, 1), (2, 1), (1, 2)]));
    }

    #[test]
    fn test_blank_lines_and_indentation_ignored() {
        let description = parse_pattern_from_string("  010\n\n  101\n").unwrap();

        assert_eq!((description.width, description.height), (3, 2));
        assert_eq!(description.live_cells, LiveCells::from_pairs(&[(1, 0), (0, 1), (2, 1)]));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_pattern_from_string("010\n1X1\n010\n"),
            Err(InputError::InvalidCharacter { ch: 'X', row: 1, col: 1 })
        );
        assert_eq!(
            parse_pattern_from_string("010\n11\n010\n"),
            Err(InputError::RaggedRow { row: 1, len: 2, expected: 3 })
        );
        assert_eq!(parse_pattern_from_string("\n \n"), Err(InputError::EmptyPattern));
    }

    #[test]
    fn test_load_pattern_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test_pattern.txt");
        std::fs::write(&file_path, "101\n010\n").unwrap();

        let loaded = load_pattern_from_file(&file_path).unwrap();
        assert_eq!(loaded.width, 3);
        assert_eq!(loaded.height, 2);
        assert_eq!(loaded.live_cells, LiveCells::from_pairs(&[(0, 0), (2, 0), (1, 1)]));

        assert!(load_pattern_from_file(temp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_load_description_from_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("board.json");
        std::fs::write(&path, r#"{"width": 10, "height": 4, "live_cells": [[-3, 2], [7, 9]]}"#).unwrap();

        let description = load_description_from_json(&path).unwrap();
        assert_eq!(description.width, 10);
        assert!(description.live_cells.contains(Coordinate::new(-3, 2)));

        std::fs::write(&path, r#"{"width": -1, "height": 4, "live_cells": []}"#).unwrap();
        assert!(load_description_from_json(&path).is_err());

        std::fs::write(&path, r#"{"width": 1, "height": 1, "live_cells": [[0, -9223372036854775808]]}"#).unwrap();
        assert!(load_description_from_json(&path).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width, 5);
        assert_eq!(glider.height, 5);
        assert_eq!(glider.live_cells.len(), 5);

        let blinker = load_pattern_from_file(temp_dir.path().join("blinker.txt")).unwrap();
        assert_eq!(blinker.live_cells, LiveCells::from_pairs(&[(1, 0), (1, 1), (1, 2)]));
    }
}
