//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Board, BoundingBox, Coordinate, LiveCells};
use anyhow::{Context, Result};

/// Format boards for display
pub struct BoardFormatter;

impl BoardFormatter {
    /// Render a board in the requested output format.
    /// Text drawings covering more than `max_render_cells` cells fall back to a
    /// coordinate list
    pub fn render(board: &Board, format: OutputFormat, max_render_cells: u64) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_board(board, max_render_cells)),
            OutputFormat::Json => serde_json::to_string_pretty(board)
                .with_context(|| format!("Failed to serialize board {}", board.id)),
        }
    }

    /// Format a single board for console output
    pub fn format_board(board: &Board, max_render_cells: u64) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Board {} ===\n", board.id));
        output.push_str(&format!("Size: {}x{}\n", board.width, board.height));
        output.push_str(&format!("Living Cells: {}\n", board.living_count()));

        let Some(viewport) = board.viewport() else {
            output.push_str("\n(empty)\n");
            return output;
        };

        match viewport.area() {
            Some(area) if area <= max_render_cells => {
                if viewport.min != Coordinate::new(0, 0) {
                    output.push_str(&format!("Origin: {}\n", viewport.min));
                }
                output.push('\n');
                output.push_str(&Self::format_cells_compact(&board.live_cells, viewport));
            }
            _ => {
                output.push_str(&format!(
                    "\nArea {}x{} exceeds the render limit of {} cells; live cells:\n",
                    viewport.width(),
                    viewport.height(),
                    max_render_cells
                ));
                output.push_str(&Self::format_cells_list(&board.live_cells));
            }
        }

        output
    }

    /// Format the cells inside `viewport` in compact form
    pub fn format_cells_compact(cells: &LiveCells, viewport: BoundingBox) -> String {
        let mut output = String::new();
        for y in viewport.min.y..=viewport.max.y {
            for x in viewport.min.x..=viewport.max.x {
                output.push(if cells.contains(Coordinate::new(x, y)) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// One `(x, y)` per line in row-major order
    pub fn format_cells_list(cells: &LiveCells) -> String {
        cells.sorted().iter().map(|c| format!("{}\n", c)).collect()
    }
}

/// Status lines for the terminal, colored unless `NO_COLOR` is set or `TERM=dumb`
pub struct ColorOutput;

impl ColorOutput {
    fn paint(text: &str, ansi: u8) -> String {
        let plain = std::env::var_os("NO_COLOR").is_some()
            || std::env::var("TERM").is_ok_and(|term| term == "dumb");
        if plain {
            text.to_string()
        } else {
            format!("\x1b[{}m{}\x1b[0m", ansi, text)
        }
    }

    pub fn error(text: &str) -> String {
        Self::paint(text, 31)
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, 32)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, 33)
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, 34)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{BoardDescription, BoardId};

    const LIMIT: u64 = 10_000;

    fn blinker_board() -> Board {
        Board::new(
            BoardId::from_u128(0xfeed),
            BoardDescription {
                width: 3,
                height: 3,
                live_cells: LiveCells::from_pairs(&[(1, 0), (1, 1), (1, 2)]),
            },
        )
    }

    #[test]
    fn test_board_formatting() {
        let text = BoardFormatter::format_board(&blinker_board(), LIMIT);

        assert!(text.contains("0000000000000000000000000000feed"));
        assert!(text.contains("Size: 3x3"));
        assert!(text.contains("Living Cells: 3"));
        assert!(text.ends_with("·█·\n·█·\n·█·\n"));
        assert!(!text.contains("Origin"));
    }

    #[test]
    fn test_board_formatting_shows_shifted_origin() {
        let mut board = blinker_board();
        board.live_cells = LiveCells::from_pairs(&[(-2, 1)]);

        let text = BoardFormatter::format_board(&board, LIMIT);
        assert!(text.contains("Origin: (-2, 0)"));
    }

    #[test]
    fn test_empty_board_formatting() {
        let mut board = blinker_board();
        board.width = 0;
        board.live_cells = LiveCells::new();

        assert!(BoardFormatter::format_board(&board, LIMIT).ends_with("(empty)\n"));
    }

    #[test]
    fn test_far_drifted_glider_is_listed() {
        let mut board = blinker_board();
        board.width = 5;
        board.height = 5;
        board.live_cells = LiveCells::from_pairs(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
            .translated(250_000, 250_000);

        let text = BoardFormatter::format_board(&board, LIMIT);
        assert!(text.contains("Area 250003x250003 exceeds the render limit of 10000 cells"));
        assert!(text.ends_with(
            "(250001, 250000)\n(250002, 250001)\n(250000, 250002)\n(250001, 250002)\n(250002, 250002)\n"
        ));
        assert!(!text.contains('·'));
    }

    #[test]
    fn test_huge_dimensions_are_listed() {
        let mut board = blinker_board();
        board.width = usize::MAX;
        board.height = usize::MAX;

        let text = BoardFormatter::format_board(&board, LIMIT);
        assert!(text.contains("exceeds the render limit"));
        assert!(text.ends_with("(1, 0)\n(1, 1)\n(1, 2)\n"));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(BoardFormatter::format_board(&blinker_board(), 9).ends_with("·█·\n"));
        assert!(BoardFormatter::format_board(&blinker_board(), 8).contains("exceeds the render limit"));
    }

    #[test]
    fn test_json_rendering() {
        let json = BoardFormatter::render(&blinker_board(), OutputFormat::Json, LIMIT).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, blinker_board());
    }

    #[test]
    fn test_color_output_keeps_text() {
        assert!(ColorOutput::success("OK").contains("OK"));
        assert!(ColorOutput::error("failed").contains("failed"));
    }
}
