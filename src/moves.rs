use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) dir: Dir,
    pub(crate) is_push: bool,
}

impl Move {
    pub(crate) fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }

    pub fn dir(self) -> Dir {
        self.dir
    }

    pub fn is_push(self) -> bool {
        self.is_push
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A solution - the moves leading from the initial state to a goal state.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dirs(&self) -> Vec<Dir> {
        self.0.iter().map(|m| m.dir()).collect()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, false),
            Move::new(Dir::Left, false),
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, true),
            Move::new(Dir::Down, true),
            Move::new(Dir::Left, true),
        ]);
        assert_eq!(moves.to_string(), "urdlURDL");
        assert_eq!(format!("{:?}", moves), "urdlURDL");
    }

    #[test]
    fn counting() {
        let moves = Moves::new(vec![
            Move::new(Dir::Up, true),
            Move::new(Dir::Right, false),
            Move::new(Dir::Down, true),
        ]);
        assert_eq!(moves.move_cnt(), 3);
        assert_eq!(moves.push_cnt(), 2);
        assert_eq!(moves.dirs(), vec![Dir::Up, Dir::Right, Dir::Down]);
        assert!(!moves.is_empty());
        assert!(Moves::default().is_empty());
    }

    #[test]
    fn iterating() {
        let v = vec![
            Move::new(Dir::Up, false),
            Move::new(Dir::Left, true),
        ];
        let moves = Moves::new(v.clone());

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves {
            v2.push(m);
        }

        assert_eq!(v2.len(), 6);
        for chunk in v2.chunks(2) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
