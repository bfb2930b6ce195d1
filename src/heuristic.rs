//! Cost-to-goal estimates for A*.
//!
//! All three are admissible and consistent: a single move changes each of them by
//! at most one.

use arrayvec::ArrayVec;

use crate::{Pos, State, SIDE};

const LINE: usize = SIDE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Heuristic {
    Hamming,
    Manhattan,
    LinearConflict,
}

impl Heuristic {
    pub const ALL: [Self; 3] = [Self::Hamming, Self::Manhattan, Self::LinearConflict];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Hamming => "hamming",
            Heuristic::Manhattan => "manhattan",
            Heuristic::LinearConflict => "linear-conflict",
        }
    }

    pub fn estimate(self, state: &State) -> u32 {
        match self {
            Heuristic::Hamming => hamming(state),
            Heuristic::Manhattan => manhattan(state),
            Heuristic::LinearConflict => linear_conflict(state),
        }
    }
}

/// Number of tiles off their goal cell. The blank does not count.
pub fn hamming(state: &State) -> u32 {
    state
        .cells()
        .filter(|&(pos, tile)| Pos::goal_of(tile).map_or(false, |goal| goal != pos))
        .count() as u32
}

/// Sum over tiles of the grid distance to their goal cell.
pub fn manhattan(state: &State) -> u32 {
    state
        .cells()
        .filter_map(|(pos, tile)| Some(pos.distance(Pos::goal_of(tile)?)))
        .sum()
}

/// Manhattan distance plus two moves for every tile that has to step out of its
/// goal row or column so the tiles sharing that line can pass each other.
pub fn linear_conflict(state: &State) -> u32 {
    let mut evicted = 0;
    for line in 0..SIDE {
        // Goal columns of the tiles already in their goal row, left to right.
        let row = state
            .cells()
            .filter(|(pos, _)| pos.row() == line)
            .filter_map(|(_, tile)| Pos::goal_of(tile))
            .filter(|goal| goal.row() == line)
            .map(|goal| goal.col())
            .collect::<ArrayVec<u8, LINE>>();
        evicted += row.len() - longest_increasing(&row);

        let col = state
            .cells()
            .filter(|(pos, _)| pos.col() == line)
            .filter_map(|(_, tile)| Pos::goal_of(tile))
            .filter(|goal| goal.col() == line)
            .map(|goal| goal.row())
            .collect::<ArrayVec<u8, LINE>>();
        evicted += col.len() - longest_increasing(&col);
    }
    manhattan(state) + 2 * evicted as u32
}

fn longest_increasing(seq: &[u8]) -> usize {
    // Ending-at lengths; lines are at most three long.
    let mut ending = ArrayVec::<usize, LINE>::new();
    for (i, &x) in seq.iter().enumerate() {
        let before = seq[..i]
            .iter()
            .zip(&ending)
            .filter(|&(&y, _)| y < x)
            .map(|(_, &len)| len)
            .max()
            .unwrap_or(0);
        ending.push(before + 1);
    }
    ending.into_iter().max().unwrap_or(0)
}
