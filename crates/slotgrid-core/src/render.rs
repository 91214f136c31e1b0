//! Plain-text dump of the grid.

use std::fmt;

use crate::grid::Grid;

/// Token printed for a disabled cell.
pub const DISABLED_TOKEN: char = '.';

impl Grid {
    /// One line per entry, one space-separated token per column.
    ///
    /// Enabled cells print their value, disabled cells print
    /// [`DISABLED_TOKEN`]. Lines are joined with `\n`, without a trailing
    /// newline.
    pub fn render(&self) -> String {
        self.entries()
            .iter()
            .map(|entry| {
                entry
                    .slots
                    .iter()
                    .map(|slot| {
                        if slot.enabled {
                            slot.value.to_string()
                        } else {
                            DISABLED_TOKEN.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_grid() {
        assert_eq!(Grid::new().render(), "");
    }

    #[test]
    fn render_entries_without_slots() {
        assert_eq!(Grid::with_shape(3, 0).render(), "\n\n");
    }

    #[test]
    fn render_values_and_disabled_cells() {
        let mut grid = Grid::with_shape(2, 3);
        grid.set_slot_value(0, 1, 12).unwrap();
        grid.set_slot_value(1, 2, -3).unwrap();
        grid.disable_slot(1, 0).unwrap();

        assert_eq!(grid.render(), "0 12 0\n. 0 -3");
    }

    #[test]
    fn render_shape_matches_grid() {
        let grid = Grid::with_shape(4, 7);
        let rendered = grid.render();
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.split(' ').count() == 7));
    }

    #[test]
    fn display_matches_render() {
        let mut grid = Grid::with_shape(1, 2);
        grid.disable_slot(0, 1).unwrap();
        assert_eq!(grid.to_string(), grid.render());
    }
}
