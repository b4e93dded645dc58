use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{Cell, Pos};
use crate::level::Level;
use crate::map::GridMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(x, y) => write!(f, "Invalid cell at pos: [{}, {}]", x, y),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.trim_start().contains('<') {
        parse_format(level, Format::Custom)
    } else {
        parse_format(level, Format::Xsb)
    }
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let grid = match format {
        Format::Custom => parse_custom(level)?,
        Format::Xsb => parse_xsb(level)?,
    };

    let mut player_pos = None;
    for (y, row) in grid.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if cell.is_player_start() {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(Pos::new(x as i32, y as i32));
            }
        }
    }
    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;

    Ok(Level::new(GridMap::from_rows(&grid), player_pos))
}

/// Parses my custom format - two chars per cell, `<>` is a wall,
/// otherwise the first char is the contents and the second one the floor
fn parse_custom(level: &str) -> Result<Vec<Vec<Cell>>, ParserErr> {
    let mut grid = Vec::new();

    for (y, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        let mut chars = line.chars();
        while let (Some(c1), Some(c2)) = (chars.next(), chars.next()) {
            let x = row.len();
            let cell = match (c1, c2) {
                ('<', '>') => Cell::Wall,
                (' ', ' ') => Cell::Empty,
                (' ', '_') => Cell::Target,
                ('B', ' ') => Cell::Box,
                ('B', '_') => Cell::BoxOnTarget,
                ('P', ' ') => Cell::PlayerStart,
                ('P', '_') => Cell::PlayerOnTarget,
                _ => return Err(ParserErr::Pos(x, y)),
            };
            row.push(cell);
        }
        grid.push(row);
    }

    Ok(grid)
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(level: &str) -> Result<Vec<Vec<Cell>>, ParserErr> {
    let mut grid = Vec::new();

    for (y, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (x, cur_char) in line.chars().enumerate() {
            let cell = match cur_char {
                '#' => Cell::Wall,
                'p' | '@' => Cell::PlayerStart,
                'P' | '+' => Cell::PlayerOnTarget,
                'b' | '$' => Cell::Box,
                'B' | '*' => Cell::BoxOnTarget,
                '.' => Cell::Target,
                ' ' | '-' | '_' => Cell::Empty,
                _ => return Err(ParserErr::Pos(x, y)),
            };
            row.push(cell);
        }
        grid.push(row);
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;

    #[test]
    fn custom_fail_empty() {
        let level = "";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn custom_fail_no_player() {
        let level = r"
<><><>
<>  <>
<><><>
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn custom_fail_multiple_players() {
        let level = r"
<><><><>
<>P P_<>
<><><><>
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn custom_fail_unknown_cell() {
        let level = r"
<><><><>
<>P  R<>
<><><><>
";
        assert_failure(level, ParserErr::Pos(2, 1));
    }

    #[test]
    fn custom_goals() {
        let level = r"
<><><><><>
<> _B_<><>
<>B B <><>
<>  P_<><>
<><><><><>
";
        assert_success_custom(level);
        let level = parse_format(level, Format::Custom).unwrap();
        assert_eq!(level.player_pos, Pos::new(2, 3));
        assert_eq!(level.map.find_boxes().len(), 3);
        assert_eq!(level.map.find_targets().len(), 3);
    }

    #[test]
    fn custom_player() {
        let level = r"
<><><>
<>P <>
<><><>
";
        assert_success_custom(level);
    }

    #[test]
    fn xsb_fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(2, 1));
    }

    #[test]
    fn xsb_fail_multiple_players() {
        let level = r"
#####
#@$+#
#####
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn xsb_simplest() {
        let level = r"
#####
#@$.#
#####
";
        assert_success_xsb(level);
    }

    #[test]
    fn xsb_corner_boxes() {
        let level = r"
*###*
#@$.#
*###*
";
        assert_success_xsb(level);
    }

    #[test]
    fn xsb_alternative_chars() {
        let level = parse_format("#p-b_B.#", Format::Xsb).unwrap();
        assert_eq!(level.to_string(), "#@ $ *.#\n");
    }

    #[test]
    fn xsb_original_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        assert_success_xsb(level);
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        // shared for XSB and custom because no need to print here
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success_custom(input_level: &str) {
        let level = parse_format(input_level, Format::Custom).unwrap();
        assert_eq!(
            level.custom().to_string(),
            input_level.trim_start_matches('\n')
        );
    }

    fn assert_success_xsb(input_level: &str) {
        let level = parse_format(input_level, Format::Xsb).unwrap();
        assert_eq!(level.to_string(), input_level.trim_start_matches('\n'));
    }
}
