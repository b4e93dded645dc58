use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Cell, Contents, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// The part of a cell that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Floor {
    Empty,
    Wall,
    Target,
}

impl From<Cell> for Floor {
    fn from(cell: Cell) -> Self {
        if cell == Cell::Wall {
            Floor::Wall
        } else if cell.is_target() {
            Floor::Target
        } else {
            Floor::Empty
        }
    }
}

pub struct MapFormatter<'a> {
    grid: &'a Vec2d<Cell>,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<Cell>, state: Option<&'a State>, format: Format) -> Self {
        Self {
            grid,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.grid.scratchpad(Contents::Empty);
        if let Some(state) = self.state {
            for &b in state.boxes() {
                if self.grid.get(b).is_some() {
                    state_grid[b] = Contents::Box;
                }
            }
            if self.grid.get(state.player_pos()).is_some() {
                state_grid[state.player_pos()] = Contents::Player;
            }
        }

        for y in 0..self.grid.rows() {
            let y = y as i32;

            // don't print trailing empty cells to match the input level strings
            let mut line_len = 0;
            for x in 0..self.grid.cols() {
                let pos = Pos::new(x as i32, y);
                if Floor::from(self.grid[pos]) != Floor::Empty
                    || state_grid[pos] != Contents::Empty
                {
                    line_len = x + 1;
                }
            }

            for x in 0..line_len {
                let pos = Pos::new(x as i32, y);
                let floor = Floor::from(self.grid[pos]);
                match self.format {
                    Format::Custom => Self::write_cell_custom(floor, state_grid[pos], f)?,
                    Format::Xsb => Self::write_cell_xsb(floor, state_grid[pos], f)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_custom(floor: Floor, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        if floor == Floor::Wall {
            return write!(f, "<>");
        }
        match contents {
            Contents::Empty => write!(f, " ")?,
            Contents::Box => write!(f, "B")?,
            Contents::Player => write!(f, "P")?,
        };
        match floor {
            Floor::Empty => write!(f, " "),
            Floor::Target => write!(f, "_"),
            Floor::Wall => unreachable!("Wall again"),
        }
    }

    fn write_cell_xsb(floor: Floor, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (floor, contents) {
            (Floor::Empty, Contents::Empty) => write!(f, " "),
            (Floor::Empty, Contents::Box) => write!(f, "$"),
            (Floor::Empty, Contents::Player) => write!(f, "@"),
            // the solver never moves anything into a wall, print it anyway
            (Floor::Wall, _) => write!(f, "#"),
            (Floor::Target, Contents::Empty) => write!(f, "."),
            (Floor::Target, Contents::Box) => write!(f, "*"),
            (Floor::Target, Contents::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn state_overrides_grid_markers() {
        let level: Level = r"
######
#@$ .#
######
"
        .parse()
        .unwrap();
        let moved = State::new(Pos::new(3, 1), vec![Pos::new(4, 1)]);
        let expected = r"
######
#  @*#
######
"
        .trim_start_matches('\n');
        assert_eq!(
            level
                .map
                .format_with_state(Format::Xsb, &moved)
                .to_string(),
            expected
        );

        let expected = r"
<><><><><><>
<>    P B_<>
<><><><><><>
"
        .trim_start_matches('\n');
        assert_eq!(
            level
                .map
                .format_with_state(Format::Custom, &moved)
                .to_string(),
            expected
        );
    }
}
