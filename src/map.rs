use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Cell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Read-only access to the static layout of a level.
///
/// Implementors only need to provide bounds and cell lookup,
/// everything the solver asks about the level is derived from those.
pub trait Map {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// `None` means `pos` is outside the grid.
    fn cell(&self, pos: Pos) -> Option<Cell>;

    /// Sorted positions of all boxes in the initial layout.
    fn find_boxes(&self) -> Vec<Pos> {
        self.find_cells(Cell::has_box)
    }

    /// Sorted positions of all targets.
    fn find_targets(&self) -> Vec<Pos> {
        self.find_cells(Cell::is_target)
    }

    fn find_player_start(&self) -> Option<Pos> {
        self.find_cells(Cell::is_player_start).into_iter().next()
    }

    fn find_cells(&self, pred: fn(Cell) -> bool) -> Vec<Pos> {
        let mut found = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let pos = Pos::new(x as i32, y as i32);
                if let Some(cell) = self.cell(pos) {
                    if pred(cell) {
                        found.push(pos);
                    }
                }
            }
        }
        found.sort();
        found
    }

    /// Static obstruction check for a player move and optionally the box it pushes.
    ///
    /// Only bounds and walls are considered. Boxes are tracked in `State`
    /// so the caller has to make sure `box_dest` isn't occupied by another box.
    fn is_move_valid(&self, player_dest: Pos, box_dest: Option<Pos>) -> bool {
        match self.cell(player_dest) {
            None | Some(Cell::Wall) => return false,
            Some(_) => {}
        }
        if let Some(box_dest) = box_dest {
            match self.cell(box_dest) {
                None | Some(Cell::Wall) => return false,
                Some(_) => {}
            }
        }
        true
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct GridMap {
    pub(crate) grid: Vec2d<Cell>,
}

impl GridMap {
    pub(crate) fn new(grid: Vec2d<Cell>) -> Self {
        GridMap { grid }
    }

    /// Rows can have different lengths, missing cells are empty.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        GridMap::new(Vec2d::new(rows, Cell::Empty))
    }

    pub fn format_with_state<'a>(&'a self, format: Format, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state), format)
    }

    pub fn format<'a>(&'a self, format: Format) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, None, format)
    }
}

impl Map for GridMap {
    fn width(&self) -> usize {
        self.grid.cols()
    }

    fn height(&self) -> usize {
        self.grid.rows()
    }

    fn cell(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos).cloned()
    }
}

impl Display for GridMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Xsb))
    }
}

impl Debug for GridMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
