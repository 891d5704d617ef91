use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Converts user-facing 1-indexed coordinates. `None` if either axis is
    /// outside `1..=3`.
    pub fn from_one_based(row: i64, col: i64) -> Option<Position> {
        let range = 1..=BOARD_SIZE as i64;
        if !range.contains(&row) || !range.contains(&col) {
            return None;
        }
        Some(Position::new((row - 1) as usize, (col - 1) as usize))
    }

    pub fn to_one_based(&self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// The two participants. The human always plays `X`, the computer `O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn mark(&self) -> Mark {
        match self {
            Side::Human => Mark::X,
            Side::Computer => Mark::O,
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Random,
    Human,
    Computer,
}

impl FirstPlayerMode {
    pub fn resolve(&self, rng: &mut SessionRng) -> Side {
        match self {
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Side::Human
                } else {
                    Side::Computer
                }
            }
            FirstPlayerMode::Human => Side::Human,
            FirstPlayerMode::Computer => Side::Computer,
        }
    }
}
