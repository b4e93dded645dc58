use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds checked access for positions that might be outside the grid.
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.data.get(y * self.cols + x)
    }
}

impl<T: Copy> Vec2d<T> {
    /// Shorter rows are padded with `fill` so the grid is rectangular.
    pub(crate) fn new(grid: &[Vec<T>], fill: T) -> Self {
        let cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..cols {
                data.push(fill);
            }
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols,
        }
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[index.y as usize * self.cols + index.x as usize]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.data[index.y as usize * self.cols + index.x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_and_bounds() {
        let grid = vec![vec![1, 2, 3], vec![4]];
        let v = Vec2d::new(&grid[..], 0);
        assert_eq!(v.rows(), 2);
        assert_eq!(v.cols(), 3);
        assert_eq!(v[Pos::new(2, 0)], 3);
        assert_eq!(v[Pos::new(0, 1)], 4);
        assert_eq!(v.get(Pos::new(2, 1)), Some(&0));
        assert_eq!(v.get(Pos::new(3, 0)), None);
        assert_eq!(v.get(Pos::new(0, 2)), None);
        assert_eq!(v.get(Pos::new(-1, 0)), None);
        assert_eq!(v.get(Pos::new(0, -1)), None);
    }

    #[test]
    fn scratchpad_has_same_shape() {
        let grid = vec![vec!['#', '#'], vec!['#', ' ']];
        let v = Vec2d::new(&grid[..], ' ');
        let mut scratch = v.scratchpad(false);
        scratch[Pos::new(1, 1)] = true;
        assert_eq!(scratch.rows(), 2);
        assert_eq!(scratch.cols(), 2);
        assert!(scratch[Pos::new(1, 1)]);
        assert!(!scratch[Pos::new(0, 1)]);
    }
}
