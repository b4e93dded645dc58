use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Custom,
    Xsb,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Custom => write!(f, "custom"),
            Format::Xsb => write!(f, "xsb"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Give up after expanding this many unique states. No limit by default.
    pub max_visited: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_visited(max_visited: usize) -> Self {
        SolverConfig {
            max_visited: Some(max_visited),
        }
    }
}
