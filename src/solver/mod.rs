pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::{debug, info, trace};

use crate::config::SolverConfig;
use crate::data::{Cell, Pos, DIRECTIONS};
use crate::level::Level;
use crate::map::Map;
use crate::moves::{Move, Moves};
use crate::state::State;
use crate::Solve;

use self::a_star::{SearchNode, Stats};

/// The level can't be searched at all - unlike no solution which is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    PlayerOutOfBounds,
    PlayerInWall,
    PlayerOnBox,
    BoxesTargets(usize, usize),
    StateLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::PlayerOutOfBounds => write!(f, "Player is outside the level"),
            SolverErr::PlayerInWall => write!(f, "Player is inside a wall"),
            SolverErr::PlayerOnBox => write!(f, "Player is on the same cell as a box"),
            SolverErr::BoxesTargets(boxes, targets) => write!(
                f,
                "Different number of boxes ({}) and targets ({})",
                boxes, targets
            ),
            SolverErr::StateLimit(limit) => {
                write!(f, "Gave up after visiting {} states", limit)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "Solution: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: SolverConfig) -> Result<SolverOk, SolverErr> {
        solve_with(&self.map, self.player_pos, config)
    }
}

pub fn solve<M: Map + ?Sized>(map: &M, player_pos: Pos) -> Result<SolverOk, SolverErr> {
    solve_with(map, player_pos, SolverConfig::default())
}

pub fn solve_with<M: Map + ?Sized>(
    map: &M,
    player_pos: Pos,
    config: SolverConfig,
) -> Result<SolverOk, SolverErr> {
    debug!("Validating level...");
    // implementors may return targets in any order
    let mut targets = map.find_targets();
    targets.sort();
    targets.dedup();
    let initial_state = initial_state(map, player_pos, &targets)?;
    debug!(
        "Validated level: {} boxes, player at {}",
        targets.len(),
        player_pos
    );
    search(map, &targets, &initial_state, config)
}

fn initial_state<M: Map + ?Sized>(
    map: &M,
    player_pos: Pos,
    targets: &[Pos],
) -> Result<State, SolverErr> {
    match map.cell(player_pos) {
        None => return Err(SolverErr::PlayerOutOfBounds),
        Some(Cell::Wall) => return Err(SolverErr::PlayerInWall),
        Some(_) => {}
    }

    let boxes = map.find_boxes();
    if boxes.contains(&player_pos) {
        return Err(SolverErr::PlayerOnBox);
    }
    if boxes.len() != targets.len() {
        return Err(SolverErr::BoxesTargets(boxes.len(), targets.len()));
    }

    Ok(State::new(player_pos, boxes))
}

fn search<M: Map + ?Sized>(
    map: &M,
    targets: &[Pos],
    initial_state: &State,
    config: SolverConfig,
) -> Result<SolverOk, SolverErr> {
    debug!("Search called");

    let mut stats = Stats::new();
    let mut seq = 0;

    let mut to_visit = BinaryHeap::new();
    // doubles as the closed set
    let mut prevs: FnvHashMap<State, Option<(State, Move)>> = FnvHashMap::default();

    let start = SearchNode::new(
        initial_state.clone(),
        None,
        0,
        box_heuristic(&initial_state.boxes, targets),
        seq,
    );
    stats.add_created(&start);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if prevs.contains_key(&cur_node.state) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) {
            info!(
                "Visited new depth: {}, total created: {}",
                cur_node.dist,
                stats.total_created()
            );
        }

        // insert here and not as soon as we discover it
        // otherwise we overwrite the shortest path with longer ones
        prevs.insert(cur_node.state.clone(), cur_node.prev);

        if is_goal(&cur_node.state.boxes, targets) {
            debug!("Solved, backtracking path");
            let moves = backtrack_moves(&prevs, &cur_node.state);
            return Ok(SolverOk::new(Some(moves), stats));
        }

        // the current state is already closed, only count the expanded ones
        if let Some(max_visited) = config.max_visited {
            if prevs.len() > max_visited {
                debug!("Reached the limit of {} expanded states", max_visited);
                return Err(SolverErr::StateLimit(max_visited));
            }
        }

        let successors = expand(map, &cur_node.state);
        trace!(
            "Expanded {:?} into {} successors",
            cur_node.state,
            successors.len()
        );
        for (new_state, mov) in successors {
            if prevs.contains_key(&new_state) {
                continue;
            }
            seq += 1;
            let h = box_heuristic(&new_state.boxes, targets);
            let next_node = SearchNode::new(
                new_state,
                Some((cur_node.state.clone(), mov)),
                cur_node.dist + 1,
                h,
                seq,
            );
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    debug!("Frontier exhausted");
    Ok(SolverOk::new(None, stats))
}

/// All states reachable by a single move, each with the move that produced it.
///
/// Directions are tried in the order of `DIRECTIONS`, each produces at most one successor.
pub fn expand<M: Map + ?Sized>(map: &M, state: &State) -> Vec<(State, Move)> {
    let mut successors = Vec::with_capacity(DIRECTIONS.len());

    for &dir in &DIRECTIONS {
        let player_dest = state.player_pos + dir;
        if state.has_box(player_dest) {
            // push
            let box_dest = player_dest + dir;
            if map.is_move_valid(player_dest, Some(box_dest)) && !state.has_box(box_dest) {
                successors.push((state.push(player_dest, box_dest), Move::new(dir, true)));
            }
        } else if map.is_move_valid(player_dest, None) {
            // step
            successors.push((state.step(player_dest), Move::new(dir, false)));
        }
    }

    successors
}

/// Sum of distances from each box to its nearest target.
///
/// Boxes are matched independently so two boxes can count the same target.
/// Only used for ordering the frontier.
pub fn box_heuristic(boxes: &[Pos], targets: &[Pos]) -> u32 {
    boxes
        .iter()
        .map(|&box_pos| {
            targets
                .iter()
                .map(|&target| box_pos.dist(target))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

/// Every box is on a target and there are no spare targets, in any order.
///
/// Expects no duplicates, boxes never share a cell.
pub fn is_goal(boxes: &[Pos], targets: &[Pos]) -> bool {
    boxes.len() == targets.len() && boxes.iter().all(|box_pos| targets.contains(box_pos))
}

/// Applies `moves` using the same rules as the search.
///
/// Returns all states including the initial one or `None` if some move is not possible.
pub fn replay<M: Map + ?Sized>(map: &M, initial_state: &State, moves: &Moves) -> Option<Vec<State>> {
    let mut states = vec![initial_state.clone()];
    for &mov in moves {
        let cur_state = &states[states.len() - 1];
        let (next_state, _) = expand(map, cur_state)
            .into_iter()
            .find(|&(_, m)| m.dir() == mov.dir())?;
        states.push(next_state);
    }
    Some(states)
}

fn backtrack_moves(prevs: &FnvHashMap<State, Option<(State, Move)>>, final_state: &State) -> Moves {
    let mut moves = Vec::new();
    let mut state = final_state;
    while let Some((ref prev, mov)) = prevs[state] {
        moves.push(mov);
        state = prev;
    }
    moves.reverse();
    Moves::new(moves)
}
