use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

mod fmt;
pub mod heuristic;
pub mod node;
mod parse;
pub mod scramble;
pub mod solve;

pub use heuristic::{hamming, linear_conflict, manhattan, Heuristic};
pub use node::{expand, Node, NodeId, Tree};
pub use solve::{distances, search, search_astar, search_bfs, search_dfs, Search, Stats, Strategy};

/// Width and height of the board.
pub const SIDE: u8 = 3;
pub const CELLS: usize = (SIDE * SIDE) as usize;
/// Tile value of the empty cell.
pub const BLANK: u8 = 0;

pub const GOAL: State = State {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
};

/// Returned when a move would slide the blank off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoard;

/// Row-major cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u8);

impl Pos {
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS as u8).map(Pos)
    }

    pub fn row(self) -> u8 {
        self.0 / SIDE
    }

    pub fn col(self) -> u8 {
        self.0 % SIDE
    }

    /// Where `tile` sits in the goal, `None` for the blank.
    pub fn goal_of(tile: u8) -> Option<Pos> {
        (tile != BLANK).then(|| Pos(tile - 1))
    }

    pub fn distance(self, other: Pos) -> u32 {
        (self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())) as u32
    }

    pub fn sibling(self, dir: Move) -> Option<Pos> {
        const DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        let row = self.row().checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let col = self.col().checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if SIDE <= row || SIDE <= col {
            return None;
        }
        Some(Pos(row * SIDE + col))
    }
}

/// Direction the blank travels. The tile on the other side slides the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Left = 0,
    Right,
    Up,
    Down,
}

impl Move {
    /// Enumeration order of `successors`.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub fn reversed(self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    /// Wire token understood by existing harnesses.
    pub fn label(self) -> &'static str {
        match self {
            Move::Left => "esquerda",
            Move::Right => "direita",
            Move::Up => "acima",
            Move::Down => "abaixo",
        }
    }
}

/// A board arrangement. Built only through parsing or moves, so it always holds
/// each tile `1..=8` and the blank exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    tiles: [u8; CELLS],
}

impl Index<Pos> for State {
    type Output = u8;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.tiles[pos.0 as usize]
    }
}
impl IndexMut<Pos> for State {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.tiles[pos.0 as usize]
    }
}

impl State {
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        Pos::all().zip(self.tiles.iter().copied())
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    pub fn blank(&self) -> Pos {
        self.cells()
            .find_map(|(pos, tile)| (tile == BLANK).then_some(pos))
            .expect("Every state has a blank")
    }

    pub fn go(&mut self, dir: Move) -> Result<(), OutOfBoard> {
        let blank = self.blank();
        let target = blank.sibling(dir).ok_or(OutOfBoard)?;
        self.tiles.swap(blank.0 as usize, target.0 as usize);
        Ok(())
    }

    pub fn moved(mut self, dir: Move) -> Option<State> {
        self.go(dir).ok()?;
        Some(self)
    }
}

/// Every `(move, state)` pair one blank slide away, in `Move::ALL` order.
pub fn successors(state: &State) -> ArrayVec<(Move, State), 4> {
    let blank = state.blank();
    Move::ALL
        .into_iter()
        .filter_map(|dir| {
            let target = blank.sibling(dir)?;
            let mut next = *state;
            next[blank] = next[target];
            next[target] = BLANK;
            Some((dir, next))
        })
        .collect()
}
