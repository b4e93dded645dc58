use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::GridMap;
use crate::moves::Moves;
use crate::solver;
use crate::state::State;

/// Prints the initial state and the state after every move, separated by empty lines.
pub struct SolutionFormatter<'a> {
    map: &'a GridMap,
    initial_state: State,
    moves: &'a Moves,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a GridMap,
        initial_state: State,
        moves: &'a Moves,
        format: Format,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match solver::replay(self.map, &self.initial_state, self.moves) {
            Some(states) => {
                for state in &states {
                    writeln!(f, "{}", self.map.format_with_state(self.format, state))?;
                }
                Ok(())
            }
            None => writeln!(f, "Moves {} can't be replayed on this level", self.moves),
        }
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
