use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::Pos;
use crate::map::{GridMap, Map};
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: GridMap,
    pub player_pos: Pos,
}

impl Level {
    pub fn new(map: GridMap, player_pos: Pos) -> Self {
        Level { map, player_pos }
    }

    pub fn initial_state(&self) -> State {
        State::new(self.player_pos, self.map.find_boxes())
    }

    pub fn xsb(&self) -> LevelFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn custom(&self) -> LevelFormatter<'_> {
        self.format(Format::Custom)
    }

    pub fn format(&self, format: Format) -> LevelFormatter<'_> {
        LevelFormatter {
            state: self.initial_state(),
            level: self,
            format,
        }
    }

    pub fn format_solution<'a>(&'a self, moves: &'a Moves, format: Format) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, self.initial_state(), moves, format)
    }
}

/// Owns the initial state so the level itself doesn't have to store it.
pub struct LevelFormatter<'a> {
    level: &'a Level,
    state: State,
    format: Format,
}

impl Display for LevelFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            MapFormatter::new(&self.level.map.grid, Some(&self.state), self.format)
        )
    }
}

impl Debug for LevelFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_level() {
        let xsb: &str = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');
        let custom: &str = r"
B_<><><>B_
<>P B  _<>
B_<><><>B_<>
"
        .trim_start_matches('\n');

        for level in [xsb, custom].iter() {
            let level: Level = level.parse().unwrap();
            assert_eq!(level.to_string(), xsb);
            assert_eq!(level.xsb().to_string(), xsb);
            assert_eq!(level.format(Format::Xsb).to_string(), xsb);
            assert_eq!(format!("{}", level), xsb);
            assert_eq!(format!("{:?}", level), xsb);

            assert_eq!(level.custom().to_string(), custom);
            assert_eq!(level.format(Format::Custom).to_string(), custom);
            assert_eq!(format!("{:?}", level.custom()), custom);

            let state = level.initial_state();
            assert_eq!(
                level.map.format_with_state(Format::Xsb, &state).to_string(),
                xsb
            );
        }
    }

    #[test]
    fn formatting_map_without_state() {
        let level: Level = r"
*###*
#@$.#
*###*#
"
        .parse()
        .unwrap();
        let map = r"
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');
        assert_eq!(level.map.to_string(), map);
        assert_eq!(format!("{:?}", level.map), map);
    }
}
