use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// What a level file says about a single cell.
///
/// `Box` and `PlayerStart` only describe the initial layout,
/// during search boxes and the player live in `State`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Box,
    Target,
    PlayerStart,
    BoxOnTarget,
    PlayerOnTarget,
}

impl Cell {
    pub fn has_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnTarget
    }

    pub fn is_target(self) -> bool {
        match self {
            Cell::Target | Cell::BoxOnTarget | Cell::PlayerOnTarget => true,
            _ => false,
        }
    }

    pub fn is_player_start(self) -> bool {
        self == Cell::PlayerStart || self == Cell::PlayerOnTarget
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Expansion order - changing it changes which of several equally good solutions is found.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
