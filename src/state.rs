use crate::data::Pos;

/// A node of the search graph.
///
/// Boxes are kept sorted so permutations of the same layout compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    pub(crate) fn step(&self, player_dest: Pos) -> State {
        State {
            player_pos: player_dest,
            boxes: self.boxes.clone(),
        }
    }

    /// The player moves to `player_dest` which must hold a box, the box ends up on `box_dest`.
    pub(crate) fn push(&self, player_dest: Pos, box_dest: Pos) -> State {
        let mut boxes = self.boxes.clone();
        if let Ok(index) = boxes.binary_search(&player_dest) {
            boxes[index] = box_dest;
        }
        State::new(player_dest, boxes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn box_order_is_irrelevant() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(3, 2), Pos::new(2, 2)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(3, 2)]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn pushing_keeps_boxes_sorted() {
        let state = State::new(Pos::new(1, 1), vec![Pos::new(2, 1), Pos::new(3, 3)]);
        let pushed = state.push(Pos::new(2, 1), Pos::new(4, 1));
        assert_eq!(pushed.player_pos(), Pos::new(2, 1));
        assert_eq!(pushed.boxes(), &[Pos::new(3, 3), Pos::new(4, 1)][..]);
        assert!(pushed.has_box(Pos::new(4, 1)));
        assert!(!pushed.has_box(Pos::new(2, 1)));

        let stepped = state.step(Pos::new(1, 2));
        assert_eq!(stepped.player_pos(), Pos::new(1, 2));
        assert_eq!(stepped.boxes(), state.boxes());
    }
}
